use crm_core::{driver::Capability, Driver, Result};

use crate::Setup;

/// Every driver opens its own in-memory database.
#[derive(Default)]
pub struct SetupSqlite;

impl SetupSqlite {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Setup for SetupSqlite {
    async fn driver(&self) -> Result<Box<dyn Driver>> {
        crm_admin::db::driver_for_url("sqlite::memory:")
    }

    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }
}
