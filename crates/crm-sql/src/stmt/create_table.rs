use super::Statement;

use crm_core::schema::db::TableId;

/// A statement to create a registered table.
#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Table to create.
    pub table: TableId,

    /// Whether or not to add an `IF NOT EXISTS` clause.
    pub if_not_exists: bool,
}

impl Statement {
    /// Creates a table if it does not exist yet.
    pub fn create_table_if_not_exists(table: TableId) -> Self {
        CreateTable {
            table,
            if_not_exists: true,
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
