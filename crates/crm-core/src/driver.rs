mod capability;
pub use capability::Capability;

mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::{async_trait, schema::db::Schema, Result};

use std::{borrow::Cow, fmt::Debug, sync::Arc};

/// Opens connections to one database.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Returns the URL this driver connects to.
    fn url(&self) -> Cow<'_, str>;

    /// Describes the driver's capability.
    fn capability(&self) -> &'static Capability;

    /// Opens a new connection.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A single database session.
///
/// Operations are executed one at a time and in order; a transaction started
/// with [`operation::Transaction::Start`] covers every operation on this
/// connection until it is committed or rolled back.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    fn capability(&self) -> &'static Capability;

    /// Execute a database operation
    async fn exec(&mut self, schema: &Arc<Schema>, op: Operation) -> Result<Response>;
}
