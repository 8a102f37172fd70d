use super::Error;

/// What was left behind when a compensating action could not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Residue {
    /// A live column exists without a descriptor.
    OrphanColumn { column: String },

    /// A live column kept its new name while the descriptor kept the old one.
    RenamedColumn { live: String, described: String },
}

/// Error when a compensating action failed and the live table no longer
/// matches the metadata.
///
/// The original metadata error is attached as the cause. The inconsistency is
/// reported, never repaired automatically.
#[derive(Debug)]
pub(super) struct UnrepairedInconsistency {
    residue: Residue,
}

impl std::error::Error for UnrepairedInconsistency {}

impl core::fmt::Display for UnrepairedInconsistency {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("unrepaired inconsistency: ")?;
        match &self.residue {
            Residue::OrphanColumn { column } => {
                write!(f, "live column `{column}` has no metadata")
            }
            Residue::RenamedColumn { live, described } => write!(
                f,
                "live column `{live}` is described as `{described}`"
            ),
        }
    }
}

impl Error {
    pub fn unrepaired_inconsistency(residue: Residue) -> Error {
        Error::from(super::ErrorKind::UnrepairedInconsistency(
            UnrepairedInconsistency { residue },
        ))
    }

    pub fn is_unrepaired_inconsistency(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnrepairedInconsistency(_))
    }

    /// Returns the residue left behind, if this is an unrepaired inconsistency.
    pub fn residue(&self) -> Option<&Residue> {
        match self.kind() {
            super::ErrorKind::UnrepairedInconsistency(err) => Some(&err.residue),
            _ => None,
        }
    }
}
