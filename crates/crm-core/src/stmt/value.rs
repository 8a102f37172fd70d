use crate::{Error, Result};

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// Ordered list of strings, stored as `text[]` where supported
    List(Vec<String>),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),

    /// Point in time, always UTC
    Timestamp(DateTime<Utc>),

    /// Record identifier
    Uuid(Uuid),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub(crate) fn variant_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "Bool",
            Value::I64(_) => "I64",
            Value::List(_) => "List",
            Value::Null => "Null",
            Value::String(_) => "String",
            Value::Timestamp(_) => "Timestamp",
            Value::Uuid(_) => "Uuid",
        }
    }

    pub fn to_bool(self) -> Result<bool> {
        match self {
            Self::Bool(v) => Ok(v),
            value => Err(Error::type_conversion(value, "bool")),
        }
    }

    pub fn to_i64(self) -> Result<i64> {
        match self {
            Self::I64(v) => Ok(v),
            value => Err(Error::type_conversion(value, "i64")),
        }
    }

    pub fn to_string(self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v),
            value => Err(Error::type_conversion(value, "String")),
        }
    }

    /// Like [`Value::to_string`], mapping `Null` to `None`.
    pub fn to_option_string(self) -> Result<Option<String>> {
        match self {
            Self::Null => Ok(None),
            value => value.to_string().map(Some),
        }
    }

    pub fn to_list(self) -> Result<Vec<String>> {
        match self {
            Self::List(v) => Ok(v),
            value => Err(Error::type_conversion(value, "Vec<String>")),
        }
    }

    pub fn to_option_list(self) -> Result<Option<Vec<String>>> {
        match self {
            Self::Null => Ok(None),
            value => value.to_list().map(Some),
        }
    }

    pub fn to_timestamp(self) -> Result<DateTime<Utc>> {
        match self {
            Self::Timestamp(v) => Ok(v),
            value => Err(Error::type_conversion(value, "DateTime<Utc>")),
        }
    }

    pub fn to_uuid(self) -> Result<Uuid> {
        match self {
            Self::Uuid(v) => Ok(v),
            value => Err(Error::type_conversion(value, "Uuid")),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_owned())
    }
}

impl From<Vec<String>> for Value {
    fn from(src: Vec<String>) -> Self {
        Self::List(src)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(src: DateTime<Utc>) -> Self {
        Self::Timestamp(src)
    }
}

impl From<Uuid> for Value {
    fn from(src: Uuid) -> Self {
        Self::Uuid(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}
