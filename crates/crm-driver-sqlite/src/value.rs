use crm_core::{
    err,
    schema::db::Type,
    stmt::{self, Value as CoreValue},
    Error, Result,
};
use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};

use chrono::{DateTime, SecondsFormat, Utc};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a SQLite value within a row to a core value of the column's
    /// storage type.
    pub fn from_sql(row: &Row, index: usize, ty: Type) -> Result<Self> {
        let value: SqlValue = row.get(index).map_err(Error::driver)?;

        let core_value = match value {
            SqlValue::Null => stmt::Value::Null,
            SqlValue::Integer(value) => match ty {
                Type::Boolean => stmt::Value::Bool(value != 0),
                Type::Integer => stmt::Value::I64(value),
                Type::Text => stmt::Value::String(value.to_string()),
                _ => return Err(err!("unexpected integer for {ty:?} column; index={index}")),
            },
            SqlValue::Text(value) => match ty {
                Type::Uuid => stmt::Value::Uuid(value.parse()?),
                Type::Timestamptz => stmt::Value::Timestamp(
                    DateTime::parse_from_rfc3339(&value)?.with_timezone(&Utc),
                ),
                Type::TextArray => {
                    stmt::Value::List(serde_json::from_str(&value).map_err(Error::driver)?)
                }
                _ => stmt::Value::String(value),
            },
            SqlValue::Real(value) => {
                return Err(Error::unsupported_feature(format!(
                    "floating point value {value} in column {index}"
                )))
            }
            SqlValue::Blob(_) => {
                return Err(Error::unsupported_feature(format!(
                    "blob value in column {index}"
                )))
            }
        };

        Ok(Value(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use stmt::Value;

        match &self.0 {
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::List(v) => {
                let json = serde_json::to_string(v)
                    .map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(err)))?;
                Ok(ToSqlOutput::Owned(SqlValue::Text(json)))
            }
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Timestamp(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(
                v.to_rfc3339_opts(SecondsFormat::Nanos, true),
            ))),
            Value::Uuid(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(v.to_string()))),
        }
    }
}
