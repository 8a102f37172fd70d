use super::Error;

/// Error when a rename would produce the identifier the column already has.
#[derive(Debug)]
pub(super) struct SameNameError {
    name: Box<str>,
}

impl std::error::Error for SameNameError {}

impl core::fmt::Display for SameNameError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "column is already named `{}`", self.name)
    }
}

impl Error {
    pub fn same_name(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SameName(SameNameError {
            name: name.into().into(),
        }))
    }

    pub fn is_same_name(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SameName(_))
    }
}
