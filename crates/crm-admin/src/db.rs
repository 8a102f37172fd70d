mod builder;
pub use builder::Builder;

mod connect;
pub use connect::driver_for_url;

use crate::{
    tables::Tables, ClientAdmin, Config, MetadataStore, Result, SchemaMutator, UserAdmin,
};

use crm_core::{
    driver::{operation::CreateTable, Capability, Connection, Driver},
    Schema,
};
use tokio::sync::Mutex;

use std::sync::Arc;

/// Shared state between all `Db` clones.
pub(crate) struct Shared {
    pub(crate) driver: Box<dyn Driver>,
    pub(crate) schema: Arc<Schema>,
    pub(crate) tables: Tables,
    pub(crate) config: Config,

    /// The one connection of this handle. Each operation holds the lock for
    /// its whole duration, so operations issued through clones of one `Db`
    /// run one at a time.
    pub(crate) connection: Mutex<Box<dyn Connection>>,
}

/// A database handle.
///
/// Cloning is cheap; clones share the underlying connection.
#[derive(Clone)]
pub struct Db {
    pub(crate) shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects with the default configuration.
    pub async fn connect(url: &str) -> Result<Db> {
        Db::builder().connect(url).await
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.shared.driver
    }

    pub fn capability(&self) -> &'static Capability {
        self.shared.driver.capability()
    }

    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    /// Creates the built-in tables that do not exist yet.
    pub async fn migrate(&self) -> Result<()> {
        let mut store = self.metadata().await;

        for table in &self.shared.schema.tables {
            tracing::debug!(table = %table.name, "creating table if absent");
            store.exec(CreateTable { table: table.id }).await?;
        }

        tracing::info!(tables = self.shared.schema.tables.len(), "schema migrated");
        Ok(())
    }

    /// Locks the connection for direct access to the built-in tables.
    pub async fn metadata(&self) -> MetadataStore<'_> {
        MetadataStore::new(&self.shared).await
    }

    /// Custom column management.
    pub fn columns(&self) -> SchemaMutator<'_> {
        SchemaMutator::new(self)
    }

    /// Operator account management.
    pub fn users(&self) -> UserAdmin<'_> {
        UserAdmin::new(self)
    }

    /// Client record management.
    pub fn clients(&self) -> ClientAdmin<'_> {
        ClientAdmin::new(self)
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("driver", &self.shared.driver)
            .field("config", &self.shared.config)
            .finish()
    }
}
