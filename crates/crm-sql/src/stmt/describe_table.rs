use super::Statement;

/// A query listing a live table's columns in position order.
///
/// The table name is passed as a parameter.
#[derive(Debug, Clone)]
pub struct DescribeTable {
    pub table: String,
}

impl Statement {
    pub fn describe_table(table: impl Into<String>) -> Self {
        DescribeTable {
            table: table.into(),
        }
        .into()
    }
}

impl From<DescribeTable> for Statement {
    fn from(value: DescribeTable) -> Self {
        Self::DescribeTable(value)
    }
}
