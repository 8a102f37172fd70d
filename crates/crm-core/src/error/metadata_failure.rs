use super::Error;

/// Error when the metadata write following a successful structural change
/// fails.
#[derive(Debug)]
pub(super) struct MetadataFailure {
    kind: MetadataFailureKind,
}

#[derive(Debug)]
enum MetadataFailureKind {
    /// The metadata write failed; the structural change was undone.
    Write { action: Box<str> },

    /// The column was dropped but its descriptor could not be deleted.
    Dangling { column: Box<str> },
}

impl std::error::Error for MetadataFailure {}

impl core::fmt::Display for MetadataFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            MetadataFailureKind::Write { action } => {
                write!(f, "metadata change failed ({action})")
            }
            MetadataFailureKind::Dangling { column } => write!(
                f,
                "metadata change failed (descriptor for dropped column `{column}` left dangling)"
            ),
        }
    }
}

impl Error {
    /// Creates a metadata-failure classification.
    pub fn metadata_failure(action: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MetadataFailure(MetadataFailure {
            kind: MetadataFailureKind::Write {
                action: action.into().into(),
            },
        }))
    }

    /// Creates a metadata failure for a descriptor whose column is already gone.
    pub fn dangling_metadata(column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MetadataFailure(MetadataFailure {
            kind: MetadataFailureKind::Dangling {
                column: column.into().into(),
            },
        }))
    }

    /// Returns `true` if this error is a metadata failure, dangling or not.
    pub fn is_metadata_failure(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MetadataFailure(_))
    }

    /// Returns `true` if a descriptor was left describing a dropped column.
    pub fn is_dangling_metadata(&self) -> bool {
        matches!(
            self.kind(),
            super::ErrorKind::MetadataFailure(MetadataFailure {
                kind: MetadataFailureKind::Dangling { .. }
            })
        )
    }
}
