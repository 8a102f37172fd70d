use crm_core::schema::app::{ColumnName, ColumnType};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Metadata describing one custom column, a row of `column_metadata`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    pub id: Uuid,

    /// Identifier of the live column
    pub column_name: ColumnName,

    pub column_type: ColumnType,

    /// Allowed values, in order. Set for dropdown columns only.
    pub dropdown_options: Option<Vec<String>>,

    pub created_at: DateTime<Utc>,
}

impl ColumnDescriptor {
    /// The name to show an operator.
    pub fn display_name(&self) -> String {
        self.column_name.display_name()
    }
}

/// Fields of a descriptor to create. The id and timestamp are assigned on
/// insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewColumn {
    pub column_name: ColumnName,
    pub column_type: ColumnType,
    pub dropdown_options: Option<Vec<String>>,
}

/// A partial update of a descriptor. `None` leaves a field unchanged.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ColumnUpdate {
    pub column_name: Option<ColumnName>,
    pub column_type: Option<ColumnType>,
    pub dropdown_options: Option<Option<Vec<String>>>,
}

impl ColumnUpdate {
    pub fn column_name(mut self, column_name: ColumnName) -> Self {
        self.column_name = Some(column_name);
        self
    }

    pub fn column_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = Some(column_type);
        self
    }

    pub fn dropdown_options(mut self, options: Option<Vec<String>>) -> Self {
        self.dropdown_options = Some(options);
        self
    }
}

/// A column of the live table, as reported by introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveColumn {
    pub column_name: String,

    /// Type name as the database reports it, e.g. `integer` or
    /// `timestamp with time zone`
    pub data_type: String,

    pub is_nullable: bool,

    /// Default expression, if any
    pub column_default: Option<String>,
}

impl LiveColumn {
    /// Returns `true` if the column was created through the mutator.
    pub fn is_custom(&self) -> bool {
        ColumnName::is_custom(&self.column_name)
    }
}
