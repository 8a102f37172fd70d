//! Configuration for the administration backend.
//!
//! Every struct has working defaults and builder-style setters. A TOML file
//! may provide any subset of the fields:
//!
//! ```toml
//! database_url = "postgresql://crm@localhost/crm"
//!
//! [mutator]
//! table = "clients"
//! strategy = "compensating"
//! compensation_retries = 3
//! compensation_backoff_ms = 50
//!
//! [sessions]
//! ttl_secs = 28800
//!
//! [admin]
//! email = "admin@example.com"
//! password_hash = "blake3$200000$...$..."
//! ```

use crate::{PasswordHash, Strategy};

use crm_core::{err, Error, Result};
use serde::{Deserialize, Deserializer};
use std::{path::Path, str::FromStr, time::Duration};

/// Environment variable the command line reads the database URL from.
pub const DATABASE_URL_ENV: &str = "CRM_DATABASE_URL";

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Connection URL, `postgresql://...` or `sqlite:...`
    pub database_url: Option<String>,

    /// Custom column management
    pub mutator: MutatorConfig,

    /// Session tokens
    pub sessions: SessionConfig,

    /// The statically configured operator, if any
    pub admin: Option<AdminConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MutatorConfig {
    /// Table custom columns are added to
    pub table: String,

    /// How structural and metadata changes are kept consistent
    pub strategy: Strategy,

    /// Number of times a failed compensating change is retried
    pub compensation_retries: u32,

    /// Delay before the first retry; doubled for each further retry
    #[serde(rename = "compensation_backoff_ms", deserialize_with = "millis")]
    pub compensation_backoff: Duration,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// How long an issued token stays valid
    #[serde(rename = "ttl_secs", deserialize_with = "secs")]
    pub ttl: Duration,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdminConfig {
    pub email: String,
    pub password_hash: PasswordHash,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::from(e).context(err!("reading {}", path.display())))?;
        contents.parse()
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn mutator(mut self, mutator: MutatorConfig) -> Self {
        self.mutator = mutator;
        self
    }

    pub fn sessions(mut self, sessions: SessionConfig) -> Self {
        self.sessions = sessions;
        self
    }

    pub fn admin(mut self, admin: AdminConfig) -> Self {
        self.admin = Some(admin);
        self
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(|e| {
            Error::from(anyhow::Error::from(e)).context(err!("invalid configuration"))
        })?;

        if config.mutator.table.trim().is_empty() {
            return Err(Error::validation_empty("mutator.table"));
        }

        Ok(config)
    }
}

impl Default for MutatorConfig {
    fn default() -> Self {
        Self {
            table: "clients".to_string(),
            strategy: Strategy::Auto,
            compensation_retries: 3,
            compensation_backoff: Duration::from_millis(50),
        }
    }
}

impl MutatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn compensation_retries(mut self, retries: u32) -> Self {
        self.compensation_retries = retries;
        self
    }

    pub fn compensation_backoff(mut self, backoff: Duration) -> Self {
        self.compensation_backoff = backoff;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(8 * 60 * 60),
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl AdminConfig {
    /// Configures an operator, hashing the given password.
    pub fn new(email: impl Into<String>, password: &str) -> Self {
        Self {
            email: email.into(),
            password_hash: PasswordHash::new(password),
        }
    }
}

fn millis<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_millis)
}

fn secs<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_secs)
}
