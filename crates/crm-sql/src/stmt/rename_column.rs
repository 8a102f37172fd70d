use super::{Name, Statement};

/// A statement to rename a column.
#[derive(Debug, Clone)]
pub struct RenameColumn {
    pub table: Name,
    pub from: Name,
    pub to: Name,
}

impl From<RenameColumn> for Statement {
    fn from(value: RenameColumn) -> Self {
        Self::RenameColumn(value)
    }
}
