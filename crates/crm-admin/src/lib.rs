//! Administration backend for a CRM database.
//!
//! A [`Db`] handle owns one connection to the database and exposes the
//! administrative surfaces on top of it:
//!
//! * [`SchemaMutator`] adds, renames and deletes the operator-defined
//!   `custom_` columns of the clients table, keeping the `column_metadata`
//!   table in step with the live table.
//! * [`MetadataStore`] is plain typed CRUD over the built-in tables.
//! * [`UserAdmin`] and [`ClientAdmin`] validate input before storing it.
//! * [`auth`] authenticates operators and issues session tokens.
//!
//! ```no_run
//! # async fn example() -> crm_admin::Result<()> {
//! use crm_admin::{ColumnType, Db};
//!
//! let db = Db::connect("sqlite::memory:").await?;
//! db.migrate().await?;
//!
//! let column = db
//!     .columns()
//!     .add_column("Lead Score", ColumnType::Integer, None)
//!     .await?;
//! assert_eq!(column.column_name, "custom_lead_score");
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub use auth::{
    Authenticator, Credentials, Identity, Session, Sessions, StaticAdmin, UserDirectory,
};

mod clients;
pub use clients::ClientAdmin;

pub mod config;
pub use config::{AdminConfig, Config, MutatorConfig, SessionConfig};

pub mod db;
pub use db::Db;

pub mod metadata;
pub use metadata::MetadataStore;

pub mod model;
pub use model::{
    Client, ClientUpdate, ColumnDescriptor, ColumnUpdate, CrmUser, LiveColumn, NewClient,
    NewColumn, NewUser, UserUpdate,
};

pub mod mutator;
pub use mutator::{AuditReport, SchemaMutator, Strategy, TypeMismatch};

mod password;
pub use password::PasswordHash;

mod tables;

pub mod users;
pub use users::{CreateUser, UpdateUser, UserAdmin};

pub use crm_core::{
    schema::app::{ColumnName, ColumnType},
    Error, Result,
};
