use super::Operation;
use crate::{schema::db::TableId, stmt::ValueRecord};

/// Inserts one row. `values` holds one value per table column, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: TableId,
    pub values: ValueRecord,
}

impl From<Insert> for Operation {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
