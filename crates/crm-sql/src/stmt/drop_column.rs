use super::{Name, Statement};

/// A statement to drop a column from a table.
#[derive(Debug, Clone)]
pub struct DropColumn {
    /// Name of the table.
    pub table: Name,

    /// Name of the column to drop.
    pub name: Name,

    /// Whether or not to add an `IF EXISTS` clause.
    pub if_exists: bool,
}

impl From<DropColumn> for Statement {
    fn from(value: DropColumn) -> Self {
        Self::DropColumn(value)
    }
}
