use crm_core::stmt::{self, Value as CoreValue};
use postgres::types::{accepts, private::BytesMut, to_sql_checked, IsNull, ToSql, Type};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> std::result::Result<IsNull, Box<dyn std::error::Error + Sync + Send>>
    where
        Self: Sized,
    {
        match &self.0 {
            stmt::Value::Bool(value) => value.to_sql(ty, out),
            stmt::Value::I64(value) => match *ty {
                Type::INT2 => i16::try_from(*value)?.to_sql(ty, out),
                Type::INT4 => i32::try_from(*value)?.to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            stmt::Value::List(value) => value.to_sql(ty, out),
            stmt::Value::Null => Ok(IsNull::Yes),
            stmt::Value::String(value) => value.to_sql(ty, out),
            stmt::Value::Timestamp(value) => value.to_sql(ty, out),
            stmt::Value::Uuid(value) => value.to_sql(ty, out),
        }
    }

    accepts!(
        BOOL,
        INT2,
        INT4,
        INT8,
        NAME,
        TEXT,
        TEXT_ARRAY,
        TIMESTAMPTZ,
        UUID,
        VARCHAR
    );
    to_sql_checked!();
}
