use super::Operation;
use crate::schema::db::TableId;

/// Creates a registered table unless it already exists.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    pub table: TableId,
}

impl From<CreateTable> for Operation {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
