//! Operator authentication.
//!
//! An [`Authenticator`] checks credentials and names who they belong to;
//! [`Sessions`] turns that identity into a bearer token. Every failure is the
//! same [`Error::authentication_failed`], whether the email is unknown or the
//! password is wrong.

mod sessions;
pub use sessions::{Session, Sessions};

use crate::{config::AdminConfig, Db, PasswordHash, Result};

use crm_core::{async_trait, Error};
use uuid::Uuid;

#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// An authenticated operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,

    /// The `crm_users` row, unless the operator is configured statically
    pub user_id: Option<Uuid>,
}

#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    async fn authenticate(&self, credentials: &Credentials) -> Result<Identity>;
}

/// The single operator of the `[admin]` configuration section.
#[derive(Debug, Clone)]
pub struct StaticAdmin {
    email: String,
    password_hash: PasswordHash,
}

impl StaticAdmin {
    pub fn new(email: impl Into<String>, password_hash: PasswordHash) -> Self {
        Self {
            email: email.into(),
            password_hash,
        }
    }
}

impl From<&AdminConfig> for StaticAdmin {
    fn from(config: &AdminConfig) -> Self {
        StaticAdmin::new(config.email.clone(), config.password_hash.clone())
    }
}

#[async_trait]
impl Authenticator for StaticAdmin {
    fn name(&self) -> &str {
        "static_admin"
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<Identity> {
        // Verify even on an email mismatch so both failures cost the same.
        let verified = self.password_hash.verify(&credentials.password);

        if verified && credentials.email.trim() == self.email {
            Ok(Identity {
                email: self.email.clone(),
                user_id: None,
            })
        } else {
            Err(Error::authentication_failed())
        }
    }
}

/// Authenticates against the `crm_users` table.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    db: Db,
}

impl UserDirectory {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Authenticator for UserDirectory {
    fn name(&self) -> &str {
        "user_directory"
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<Identity> {
        let user = self
            .db
            .metadata()
            .await
            .user_by_email(credentials.email.trim())
            .await?;

        match user {
            Some(user) if user.password_hash.verify(&credentials.password) => Ok(Identity {
                email: user.email,
                user_id: Some(user.id),
            }),
            _ => Err(Error::authentication_failed()),
        }
    }
}
