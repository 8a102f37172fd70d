use crate::{Client, ClientUpdate, Db, NewClient, Result};

use crm_core::Error;
use uuid::Uuid;

/// Client records, limited to their built-in fields.
#[derive(Debug)]
pub struct ClientAdmin<'a> {
    db: &'a Db,
}

impl<'a> ClientAdmin<'a> {
    pub(crate) fn new(db: &'a Db) -> ClientAdmin<'a> {
        ClientAdmin { db }
    }

    pub async fn create(&self, client: NewClient) -> Result<Client> {
        if client.name.trim().is_empty() {
            return Err(Error::validation_empty("client name"));
        }

        let client = self.db.metadata().await.create_client(client).await?;
        tracing::info!(id = %client.id, "client created");
        Ok(client)
    }

    /// All clients, newest first.
    pub async fn list(&self) -> Result<Vec<Client>> {
        self.db.metadata().await.all_clients().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Client>> {
        self.db.metadata().await.client_by_id(id).await
    }

    pub async fn update(&self, id: Uuid, update: ClientUpdate) -> Result<Client> {
        if update.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(Error::validation_empty("client name"));
        }

        self.db.metadata().await.update_client(id, update).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.db.metadata().await.delete_client(id).await?;
        tracing::info!(%id, "client deleted");
        Ok(())
    }
}
