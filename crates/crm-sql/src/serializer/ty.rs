use super::{Flavor, Formatter, Params, ToSql};

use chrono::SecondsFormat;
use crm_core::schema::db::{DefaultValue, Type};

impl ToSql for Type {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let sql = match (self, f.serializer.flavor) {
            (Type::Boolean, _) => "BOOLEAN",
            (Type::Date, _) => "DATE",
            (Type::Integer, _) => "INTEGER",
            (Type::Text, _) => "TEXT",
            (Type::TextArray, Flavor::Postgresql) => "TEXT[]",
            // JSON encoded
            (Type::TextArray, Flavor::Sqlite) => "TEXT",
            (Type::Timestamptz, _) => "TIMESTAMPTZ",
            (Type::Uuid, Flavor::Postgresql) => "UUID",
            (Type::Uuid, Flavor::Sqlite) => "TEXT",
        };

        f.dst.push_str(sql);
    }
}

/// A column default, rendered for the column's storage type.
pub(super) struct DefaultExpr {
    pub(super) value: DefaultValue,
    pub(super) ty: Type,
}

impl DefaultExpr {
    /// SQLite cannot generate UUIDs; such defaults are left to the caller.
    pub(super) fn is_renderable(&self, flavor: Flavor) -> bool {
        !(flavor == Flavor::Sqlite && self.value == DefaultValue::RandomUuid)
    }
}

impl ToSql for DefaultExpr {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let sql = match (self.value, f.serializer.flavor) {
            (DefaultValue::EmptyString, _) => "''",
            (DefaultValue::Zero, _) => "0",
            (DefaultValue::False, _) => "false",
            (DefaultValue::Now, Flavor::Postgresql) => "now()",
            (DefaultValue::Now, Flavor::Sqlite) if self.ty == Type::Date => "CURRENT_DATE",
            (DefaultValue::Now, Flavor::Sqlite) => "CURRENT_TIMESTAMP",
            (DefaultValue::At(at), _) => {
                // Same text form the drivers bind timestamps with
                let literal = match self.ty {
                    Type::Date => at.date_naive().to_string(),
                    _ => at.to_rfc3339_opts(SecondsFormat::Nanos, true),
                };

                fmt!(f, "'", &literal[..], "'");
                return;
            }
            (DefaultValue::RandomUuid, Flavor::Postgresql) => "gen_random_uuid()",
            (DefaultValue::RandomUuid, Flavor::Sqlite) => {
                unreachable!("filtered by `is_renderable`")
            }
        };

        f.dst.push_str(sql);
    }
}
