use super::Operation;
use crate::{
    schema::db::TableId,
    stmt::{Filter, Value},
};

/// Assigns new values to the matching rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: TableId,

    /// `(column index, value)` pairs
    pub assignments: Vec<(usize, Value)>,

    pub filter: Filter,
}

impl From<Update> for Operation {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
