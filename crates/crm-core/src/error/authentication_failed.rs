use super::Error;

/// Error when credentials or a session token are rejected.
///
/// Deliberately carries no detail: callers must not learn whether the email
/// exists or the password was wrong.
#[derive(Debug)]
pub(super) struct AuthenticationFailed;

impl std::error::Error for AuthenticationFailed {}

impl core::fmt::Display for AuthenticationFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("authentication failed")
    }
}

impl Error {
    pub fn authentication_failed() -> Error {
        Error::from(super::ErrorKind::AuthenticationFailed(AuthenticationFailed))
    }

    pub fn is_authentication_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AuthenticationFailed(_))
    }
}
