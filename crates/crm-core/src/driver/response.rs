use crate::{err, stmt::ValueRecord, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Rows returned by the operation
    Values(Vec<ValueRecord>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn values(values: Vec<ValueRecord>) -> Self {
        Self {
            rows: Rows::Values(values),
        }
    }

    pub fn into_count(self) -> Result<u64> {
        match self.rows {
            Rows::Count(count) => Ok(count),
            Rows::Values(_) => Err(err!("invalid result: expected a row count, got rows")),
        }
    }

    pub fn into_values(self) -> Result<Vec<ValueRecord>> {
        match self.rows {
            Rows::Values(values) => Ok(values),
            Rows::Count(_) => Err(err!("invalid result: expected rows, got a row count")),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Self::Values(_))
    }
}
