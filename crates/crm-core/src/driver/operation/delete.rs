use super::Operation;
use crate::{schema::db::TableId, stmt::Filter};

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: TableId,
    pub filter: Filter,
}

impl From<Delete> for Operation {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
