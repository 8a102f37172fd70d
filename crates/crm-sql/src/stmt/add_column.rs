use super::{ColumnDef, Name, Statement};

/// A statement to add a column to a table.
#[derive(Debug, Clone)]
pub struct AddColumn {
    /// Name of the table to add the column to.
    pub table: Name,

    /// Column definition.
    pub column: ColumnDef,

    /// Whether or not to add an `IF NOT EXISTS` clause.
    pub if_not_exists: bool,
}

impl From<AddColumn> for Statement {
    fn from(value: AddColumn) -> Self {
        Self::AddColumn(value)
    }
}
