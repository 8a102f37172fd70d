use super::{Db, Shared};
use crate::{tables::Tables, Config, Result, Strategy};

use crm_core::driver::Driver;
use tokio::sync::Mutex;

use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Replace the whole configuration
    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    /// Set the table custom columns are added to
    pub fn table(&mut self, table: impl Into<String>) -> &mut Self {
        self.config.mutator.table = table.into();
        self
    }

    /// Set the consistency strategy of the schema mutator
    pub fn strategy(&mut self, strategy: Strategy) -> &mut Self {
        self.config.mutator.strategy = strategy;
        self
    }

    /// Connects to the database at `url` with one of the built-in drivers.
    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        self.build_boxed(super::driver_for_url(url)?).await
    }

    /// Connects through the given driver.
    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        self.build_boxed(Box::new(driver)).await
    }

    async fn build_boxed(&mut self, driver: Box<dyn Driver>) -> Result<Db> {
        let (schema, tables) = Tables::schema(&self.config.mutator.table);
        let connection = driver.connect().await?;

        tracing::debug!(url = %driver.url(), "connected");

        Ok(Db {
            shared: Arc::new(Shared {
                driver,
                schema: Arc::new(schema),
                tables,
                config: self.config.clone(),
                connection: Mutex::new(connection),
            }),
        })
    }
}
