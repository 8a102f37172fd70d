use super::{ty::DefaultExpr, Formatter, Params, ToSql};

use crate::stmt::ColumnDef;

impl ToSql for &ColumnDef {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, &self.name, " ", self.ty);

        if self.primary_key {
            fmt!(f, " PRIMARY KEY");
        } else if self.not_null {
            fmt!(f, " NOT NULL");
        }

        if self.unique {
            fmt!(f, " UNIQUE");
        }

        if let Some(value) = self.default {
            let default = DefaultExpr { value, ty: self.ty };

            if default.is_renderable(f.serializer.flavor) {
                fmt!(f, " DEFAULT ", default);
            }
        }
    }
}
