use super::Operation;
use crate::schema::db::Column;

/// A structural change to one column of a live table.
///
/// The table is addressed by name because custom columns are not part of the
/// registered [`Schema`](crate::Schema).
#[derive(Debug, Clone, PartialEq)]
pub struct AlterTable {
    pub table: String,
    pub action: AlterTableAction,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlterTableAction {
    /// Add a column unless one with that name already exists
    AddColumnIfNotExists(Column),

    /// Rename a column
    RenameColumn { from: String, to: String },

    /// Drop a column if it exists
    DropColumnIfExists(String),
}

impl AlterTable {
    pub fn add_column(table: impl Into<String>, column: Column) -> Self {
        Self {
            table: table.into(),
            action: AlterTableAction::AddColumnIfNotExists(column),
        }
    }

    pub fn rename_column(
        table: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            table: table.into(),
            action: AlterTableAction::RenameColumn {
                from: from.into(),
                to: to.into(),
            },
        }
    }

    pub fn drop_column(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            action: AlterTableAction::DropColumnIfExists(name.into()),
        }
    }
}

impl From<AlterTable> for Operation {
    fn from(value: AlterTable) -> Self {
        Self::AlterTable(value)
    }
}
