use crm_core::{driver::Capability, Error, Result};
use serde::Deserialize;

/// How a structural change and its metadata write are kept consistent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Transactional when the database supports transactional DDL,
    /// compensating otherwise.
    #[default]
    Auto,

    /// Both changes run in one transaction and are rolled back together.
    Transactional,

    /// The structural change is undone by a reverse change when the metadata
    /// write fails.
    Compensating,
}

impl Strategy {
    /// Picks the concrete strategy for a connection. Never returns `Auto`.
    pub fn resolve(self, capability: &Capability) -> Result<Strategy> {
        match self {
            Strategy::Auto if capability.transactional_ddl => Ok(Strategy::Transactional),
            Strategy::Auto => Ok(Strategy::Compensating),
            Strategy::Transactional if !capability.transactional_ddl => Err(
                Error::unsupported_feature("the database does not support transactional DDL"),
            ),
            strategy => Ok(strategy),
        }
    }
}
