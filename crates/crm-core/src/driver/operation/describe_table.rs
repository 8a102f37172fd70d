use super::Operation;

/// Introspects a live table.
///
/// Responds with one row per column, ordered by position:
/// `(column_name, data_type, is_nullable, column_default)`, where
/// `is_nullable` is `"YES"` or `"NO"` and `column_default` may be null.
#[derive(Debug, Clone, PartialEq)]
pub struct DescribeTable {
    pub table: String,
}

impl From<DescribeTable> for Operation {
    fn from(value: DescribeTable) -> Self {
        Self::DescribeTable(value)
    }
}
