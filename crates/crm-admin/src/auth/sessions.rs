use super::{Authenticator, Credentials, Identity};
use crate::{Result, SessionConfig};

use chrono::{DateTime, Utc};
use crm_core::Error;
use rand::{distributions::Alphanumeric, Rng};

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
    time::Duration,
};

const TOKEN_LEN: usize = 43;

/// An issued bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub identity: Identity,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// In-memory session store. Tokens do not survive a restart.
#[derive(Debug)]
pub struct Sessions {
    ttl: Duration,
    sessions: Mutex<HashMap<String, Session>>,
}

impl Sessions {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            ttl: config.ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Authenticates and issues a session in one step.
    pub async fn login(
        &self,
        authenticator: &dyn Authenticator,
        credentials: &Credentials,
    ) -> Result<Session> {
        match authenticator.authenticate(credentials).await {
            Ok(identity) => {
                tracing::info!(provider = authenticator.name(), email = %identity.email, "logged in");
                Ok(self.issue(identity))
            }
            Err(err) => {
                tracing::warn!(provider = authenticator.name(), "login failed");
                Err(err)
            }
        }
    }

    pub fn issue(&self, identity: Identity) -> Session {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect();

        let ttl = chrono::Duration::from_std(self.ttl).unwrap_or(chrono::Duration::MAX);

        let session = Session {
            token: token.clone(),
            identity,
            expires_at: Utc::now()
                .checked_add_signed(ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        };

        self.lock().insert(token, session.clone());
        session
    }

    /// Looks up a live session. Expired sessions are removed.
    pub fn validate(&self, token: &str) -> Result<Session> {
        let mut sessions = self.lock();

        match sessions.get(token) {
            Some(session) if !session.is_expired() => Ok(session.clone()),
            Some(_) => {
                sessions.remove(token);
                Err(Error::authentication_failed())
            }
            None => Err(Error::authentication_failed()),
        }
    }

    /// Returns `true` if the token was known.
    pub fn revoke(&self, token: &str) -> bool {
        self.lock().remove(token).is_some()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Session>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
