mod alter_table;
pub use alter_table::{AlterTable, AlterTableAction};

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod describe_table;
pub use describe_table::DescribeTable;

mod exec_sql;
pub use exec_sql::ExecSql;

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod transaction;
pub use transaction::Transaction;

mod update;
pub use update::Update;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Structural change against a live table
    AlterTable(AlterTable),

    /// Create a registered table if absent
    CreateTable(CreateTable),

    /// Delete the rows matching a filter
    Delete(Delete),

    /// Introspect a live table's columns
    DescribeTable(DescribeTable),

    /// Execute one raw command string
    ExecSql(ExecSql),

    /// Create a new record
    Insert(Insert),

    /// Read rows of a table
    Select(Select),

    /// Execute a transaction lifecycle op
    Transaction(Transaction),

    /// Update the rows matching a filter
    Update(Update),
}

impl Operation {
    pub fn is_alter_table(&self) -> bool {
        matches!(self, Operation::AlterTable(_))
    }

    pub fn is_transaction(&self) -> bool {
        matches!(self, Operation::Transaction(_))
    }
}
