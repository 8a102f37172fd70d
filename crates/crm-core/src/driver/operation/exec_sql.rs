use super::Operation;

/// A raw command string, executed without parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecSql {
    pub sql: String,
}

impl From<ExecSql> for Operation {
    fn from(value: ExecSql) -> Self {
        Self::ExecSql(value)
    }
}
