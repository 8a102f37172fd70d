use super::Error;

/// Error when a structural change (ADD, RENAME or DROP COLUMN) against the live
/// table fails.
///
/// The driver error is attached as the cause. No metadata change is attempted
/// after a structural failure.
#[derive(Debug)]
pub(super) struct StructuralFailure {
    action: Box<str>,
}

impl std::error::Error for StructuralFailure {}

impl core::fmt::Display for StructuralFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "structural change failed ({})", self.action)
    }
}

impl Error {
    /// Creates a structural-failure classification.
    ///
    /// Usually attached on top of the driver error with [`Error::context`].
    pub fn structural_failure(action: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::StructuralFailure(StructuralFailure {
            action: action.into().into(),
        }))
    }

    /// Returns `true` if this error is a structural failure.
    pub fn is_structural_failure(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::StructuralFailure(_))
    }
}
