use super::Value;
use crate::{err, Result};

use std::ops;

/// One row, with values in table column order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValueRecord {
    pub fields: Vec<Value>,
}

impl ValueRecord {
    pub fn from_vec(fields: Vec<Value>) -> Self {
        Self { fields }
    }

    /// Consumes the record, yielding its values in order.
    ///
    /// Errors if the record does not hold exactly `N` values.
    pub fn into_array<const N: usize>(self) -> Result<[Value; N]> {
        let len = self.fields.len();
        self.fields
            .try_into()
            .map_err(|_| err!("expected a record of width {N}; actual={len}"))
    }
}

impl ops::Deref for ValueRecord {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.fields[..]
    }
}

impl<'a> IntoIterator for &'a ValueRecord {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ValueRecord {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
