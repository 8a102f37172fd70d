mod add_column;
pub use add_column::AddColumn;

mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

mod describe_table;
pub use describe_table::DescribeTable;

mod drop_column;
pub use drop_column::DropColumn;

mod name;
pub use name::Name;

mod rename_column;
pub use rename_column::RenameColumn;

pub use crm_core::driver::operation::{Delete, Insert, Select, Update};

use crm_core::driver::{
    operation::{AlterTable, AlterTableAction},
    Capability,
};

#[derive(Debug, Clone)]
pub enum Statement {
    AddColumn(AddColumn),
    CreateTable(CreateTable),
    Delete(Delete),
    DescribeTable(DescribeTable),
    DropColumn(DropColumn),
    Insert(Insert),
    RenameColumn(RenameColumn),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// Builds the statement for a structural change.
    ///
    /// `IF [NOT] EXISTS` guards are only emitted when the database understands
    /// them; otherwise the caller is expected to check the live table first.
    pub fn alter_table(alter: &AlterTable, capability: &Capability) -> Self {
        let table = Name::from(&alter.table);

        match &alter.action {
            AlterTableAction::AddColumnIfNotExists(column) => AddColumn {
                table,
                column: ColumnDef::from_schema(column),
                if_not_exists: capability.column_if_exists,
            }
            .into(),
            AlterTableAction::RenameColumn { from, to } => RenameColumn {
                table,
                from: Name::from(from),
                to: Name::from(to),
            }
            .into(),
            AlterTableAction::DropColumnIfExists(name) => DropColumn {
                table,
                name: Name::from(name),
                if_exists: capability.column_if_exists,
            }
            .into(),
        }
    }

    /// Returns true if executing the statement produces rows.
    pub fn returns_rows(&self) -> bool {
        matches!(self, Statement::Select(_) | Statement::DescribeTable(_))
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
