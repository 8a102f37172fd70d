use super::Error;

/// Error when a value collides with a unique field.
///
/// Raised by the column pre-checks (derived identifier already described) and
/// by the drivers when the database reports a unique-constraint violation on
/// `email`, `phone_number` or `column_name`.
#[derive(Debug)]
pub(super) struct DuplicateError {
    what: Box<str>,
}

impl std::error::Error for DuplicateError {}

impl core::fmt::Display for DuplicateError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "duplicate: {}", self.what)
    }
}

impl Error {
    /// Creates a duplicate error describing the colliding value.
    pub fn duplicate(what: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Duplicate(DuplicateError {
            what: what.into().into(),
        }))
    }

    /// Returns `true` if this error is a duplicate error.
    pub fn is_duplicate(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Duplicate(_))
    }
}
