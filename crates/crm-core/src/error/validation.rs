use super::Error;

/// Error when operator input is rejected before any side effect.
#[derive(Debug)]
pub(super) struct ValidationError {
    kind: ValidationErrorKind,
}

#[derive(Debug)]
enum ValidationErrorKind {
    /// A required field is missing or blank
    Empty { field: &'static str },

    /// A field has fewer characters than required
    TooShort {
        field: &'static str,
        len: usize,
        min: usize,
    },

    /// A field does not have the expected shape
    Invalid { field: &'static str, reason: Box<str> },
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("validation failed: ")?;
        match &self.kind {
            ValidationErrorKind::Empty { field } => write!(f, "{field} must not be empty"),
            ValidationErrorKind::TooShort { field, len, min } => {
                write!(f, "{field} is too short ({len} < {min})")
            }
            ValidationErrorKind::Invalid { field, reason } => {
                write!(f, "{field} is invalid: {reason}")
            }
        }
    }
}

impl Error {
    pub fn validation_empty(field: &'static str) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            kind: ValidationErrorKind::Empty { field },
        }))
    }

    pub fn validation_too_short(field: &'static str, len: usize, min: usize) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            kind: ValidationErrorKind::TooShort { field, len, min },
        }))
    }

    pub fn validation_invalid(field: &'static str, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            kind: ValidationErrorKind::Invalid {
                field,
                reason: reason.into().into(),
            },
        }))
    }

    /// Returns `true` if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Validation(_))
    }
}
