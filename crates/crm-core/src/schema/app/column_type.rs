use crate::{
    schema::db::{DefaultValue, Type},
    Error, Result,
};

use std::{fmt, str::FromStr};

/// The logical type an operator picks for a custom column.
///
/// The string form is what `column_metadata.column_type` stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    String,
    Integer,
    Date,
    Timestamp,
    Boolean,
    /// Single selection from a fixed list of options
    Dropdown,
}

impl ColumnType {
    pub const ALL: [ColumnType; 6] = [
        ColumnType::String,
        ColumnType::Integer,
        ColumnType::Date,
        ColumnType::Timestamp,
        ColumnType::Boolean,
        ColumnType::Dropdown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Integer => "integer",
            ColumnType::Date => "date",
            ColumnType::Timestamp => "timestamp",
            ColumnType::Boolean => "boolean",
            ColumnType::Dropdown => "dropdown",
        }
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            ColumnType::String => "Text",
            ColumnType::Integer => "Number",
            ColumnType::Date => "Date",
            ColumnType::Timestamp => "Date & Time",
            ColumnType::Boolean => "Yes/No",
            ColumnType::Dropdown => "Dropdown",
        }
    }

    /// Storage type the live column is created with.
    pub fn storage_ty(self) -> Type {
        match self {
            ColumnType::String | ColumnType::Dropdown => Type::Text,
            ColumnType::Integer => Type::Integer,
            ColumnType::Date => Type::Date,
            ColumnType::Timestamp => Type::Timestamptz,
            ColumnType::Boolean => Type::Boolean,
        }
    }

    /// Default the live column is created with, so existing rows get a value.
    pub fn default_value(self) -> DefaultValue {
        match self {
            ColumnType::String | ColumnType::Dropdown => DefaultValue::EmptyString,
            ColumnType::Integer => DefaultValue::Zero,
            ColumnType::Date | ColumnType::Timestamp => DefaultValue::Now,
            ColumnType::Boolean => DefaultValue::False,
        }
    }

    pub fn is_dropdown(self) -> bool {
        matches!(self, ColumnType::Dropdown)
    }
}

impl FromStr for ColumnType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ColumnType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| {
                Error::validation_invalid("column type", format!("unknown column type `{s}`"))
            })
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
