use super::{Error, ErrorKind};

use std::error::Error as StdError;

type Source = Box<dyn StdError + Send + Sync>;

/// A failure reported by rusqlite, tokio-postgres or a URL parser.
#[derive(Debug)]
pub(super) struct DriverError(Source);

impl StdError for DriverError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.0)
    }
}

impl core::fmt::Display for DriverError {
    /// Shows the whole source chain on one line, since callers only log the
    /// outermost error.
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let first: &(dyn StdError + 'static) = &*self.0;

        for (i, err) in std::iter::successors(Some(first), |&err| err.source()).enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            core::fmt::Display::fmt(err, f)?;
        }

        Ok(())
    }
}

impl Error {
    pub fn driver(err: impl StdError + Send + Sync + 'static) -> Error {
        Error::from(ErrorKind::Driver(DriverError(Box::new(err))))
    }

    pub fn is_driver(&self) -> bool {
        matches!(self.kind(), ErrorKind::Driver(_))
    }

    /// The error the driver reported, for callers that need to inspect it,
    /// e.g. by downcasting to `rusqlite::Error`.
    pub fn driver_source(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self.kind() {
            ErrorKind::Driver(DriverError(source)) => Some(&**source),
            _ => None,
        }
    }
}
