//! Definitions of the built-in tables.
//!
//! Each table module lists its columns in storage order; the constants are the
//! column indexes used by filters, orderings and assignments.

use crm_core::schema::db::{Schema, TableId};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Tables {
    pub(crate) column_metadata: TableId,
    pub(crate) crm_users: TableId,
    pub(crate) clients: TableId,
}

impl Tables {
    /// Builds the schema of the built-in tables. `base_table` names the table
    /// custom columns are added to.
    pub(crate) fn schema(base_table: &str) -> (Schema, Tables) {
        let mut schema = Schema::default();

        let tables = Tables {
            column_metadata: schema.push(column_metadata::table()),
            crm_users: schema.push(crm_users::table()),
            clients: schema.push(clients::table(base_table)),
        };

        (schema, tables)
    }
}

pub(crate) mod column_metadata {
    use crm_core::schema::db::{Column, DefaultValue, Table, Type};

    pub(crate) const NAME: &str = "column_metadata";

    pub(crate) const ID: usize = 0;
    pub(crate) const COLUMN_NAME: usize = 1;
    pub(crate) const COLUMN_TYPE: usize = 2;
    pub(crate) const DROPDOWN_OPTIONS: usize = 3;
    pub(crate) const CREATED_AT: usize = 4;

    pub(crate) const WIDTH: usize = 5;

    pub(super) fn table() -> Table {
        Table::new(
            NAME,
            vec![
                Column::new("id", Type::Uuid)
                    .primary_key()
                    .default(DefaultValue::RandomUuid),
                Column::new("column_name", Type::Text).not_null().unique(),
                Column::new("column_type", Type::Text).not_null(),
                Column::new("dropdown_options", Type::TextArray),
                Column::new("created_at", Type::Timestamptz).default(DefaultValue::Now),
            ],
        )
    }
}

pub(crate) mod crm_users {
    use crm_core::schema::db::{Column, DefaultValue, Table, Type};

    pub(crate) const NAME: &str = "crm_users";

    pub(crate) const ID: usize = 0;
    pub(crate) const EMAIL: usize = 1;
    pub(crate) const PASSWORD_HASH: usize = 2;
    pub(crate) const USER_NAME: usize = 3;
    pub(crate) const PHONE_NUMBER: usize = 4;
    pub(crate) const CREATED_AT: usize = 5;
    pub(crate) const UPDATED_AT: usize = 6;

    pub(crate) const WIDTH: usize = 7;

    pub(super) fn table() -> Table {
        Table::new(
            NAME,
            vec![
                Column::new("id", Type::Uuid)
                    .primary_key()
                    .default(DefaultValue::RandomUuid),
                Column::new("email", Type::Text).not_null().unique(),
                Column::new("password_hash", Type::Text).not_null(),
                Column::new("name", Type::Text),
                Column::new("phone_number", Type::Text).unique(),
                Column::new("created_at", Type::Timestamptz).default(DefaultValue::Now),
                Column::new("updated_at", Type::Timestamptz).default(DefaultValue::Now),
            ],
        )
    }
}

pub(crate) mod clients {
    use crm_core::schema::db::{Column, DefaultValue, Table, Type};

    pub(crate) const ID: usize = 0;
    pub(crate) const CLIENT_NAME: usize = 1;
    pub(crate) const EMAIL: usize = 2;
    pub(crate) const PHONE: usize = 3;
    pub(crate) const CREATED_AT: usize = 4;
    pub(crate) const UPDATED_AT: usize = 5;

    pub(crate) const WIDTH: usize = 6;

    pub(super) fn table(name: &str) -> Table {
        Table::new(
            name,
            vec![
                Column::new("id", Type::Uuid)
                    .primary_key()
                    .default(DefaultValue::RandomUuid),
                Column::new("name", Type::Text)
                    .not_null()
                    .default(DefaultValue::EmptyString),
                Column::new("email", Type::Text).default(DefaultValue::EmptyString),
                Column::new("phone", Type::Text).default(DefaultValue::EmptyString),
                Column::new("created_at", Type::Timestamptz).default(DefaultValue::Now),
                Column::new("updated_at", Type::Timestamptz).default(DefaultValue::Now),
            ],
        )
    }
}
