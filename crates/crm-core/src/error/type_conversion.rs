use super::Error;
use crate::stmt::Value;

/// Error when a value read from the database does not have the expected type.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    value_variant: &'static str,
    to_type: &'static str,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {} to {}", self.value_variant, self.to_type)
    }
}

impl Error {
    pub fn type_conversion(value: Value, to_type: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            value_variant: value.variant_name(),
            to_type,
        }))
    }

    pub fn is_type_conversion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeConversion(_))
    }
}
