use super::Serializer;

use crm_core::schema::db;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    Postgresql,
    Sqlite,
}

impl<'a> Serializer<'a> {
    pub fn sqlite(schema: &'a db::Schema) -> Serializer<'a> {
        Serializer {
            schema,
            flavor: Flavor::Sqlite,
        }
    }

    pub fn postgresql(schema: &'a db::Schema) -> Serializer<'a> {
        Serializer {
            schema,
            flavor: Flavor::Postgresql,
        }
    }

    pub(super) fn is_sqlite(&self) -> bool {
        self.flavor == Flavor::Sqlite
    }
}
