use super::Operation;
use crate::{
    schema::db::TableId,
    stmt::{Filter, OrderBy},
};

/// Reads every column of the matching rows, in table column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: TableId,
    pub filter: Option<Filter>,
    pub order_by: Option<OrderBy>,
}

impl From<Select> for Operation {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
