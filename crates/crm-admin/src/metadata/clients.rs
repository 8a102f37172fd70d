use super::{now, MetadataStore};
use crate::{
    tables::clients::{self, CLIENT_NAME, CREATED_AT, EMAIL, PHONE, UPDATED_AT},
    Client, ClientUpdate, NewClient, Result,
};

use crm_core::stmt::{Filter, OrderBy, Value, ValueRecord};
use uuid::Uuid;

impl MetadataStore<'_> {
    /// Inserts a client. Custom columns take their defaults.
    pub async fn create_client(&mut self, new: NewClient) -> Result<Client> {
        let created_at = now();

        let client = Client {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            created_at,
            updated_at: created_at,
        };

        let values = vec![
            client.id.into(),
            client.name.as_str().into(),
            client.email.as_str().into(),
            client.phone.as_str().into(),
            client.created_at.into(),
            client.updated_at.into(),
        ];

        self.insert(self.tables.clients, values).await?;
        Ok(client)
    }

    /// All clients, newest first.
    pub async fn all_clients(&mut self) -> Result<Vec<Client>> {
        self.select(self.tables.clients, None, Some(OrderBy::desc(CREATED_AT)))
            .await?
            .into_iter()
            .map(client_from_record)
            .collect()
    }

    pub async fn client_by_id(&mut self, id: Uuid) -> Result<Option<Client>> {
        self.select_one(self.tables.clients, Filter::eq(clients::ID, id))
            .await?
            .map(client_from_record)
            .transpose()
    }

    pub async fn update_client(&mut self, id: Uuid, update: ClientUpdate) -> Result<Client> {
        let mut assignments = vec![];

        if let Some(name) = update.name {
            assignments.push((CLIENT_NAME, Value::from(name)));
        }

        if let Some(email) = update.email {
            assignments.push((EMAIL, Value::from(email)));
        }

        if let Some(phone) = update.phone {
            assignments.push((PHONE, Value::from(phone)));
        }

        assignments.push((UPDATED_AT, Value::from(now())));

        self.update_by_id(self.tables.clients, id, assignments)
            .await?;

        match self.client_by_id(id).await? {
            Some(client) => Ok(client),
            None => Err(self.not_found(self.tables.clients, id)),
        }
    }

    pub async fn delete_client(&mut self, id: Uuid) -> Result<()> {
        self.delete_by_id(self.tables.clients, id).await
    }
}

fn client_from_record(record: ValueRecord) -> Result<Client> {
    let [id, name, email, phone, created_at, updated_at] =
        record.into_array::<{ clients::WIDTH }>()?;

    Ok(Client {
        id: id.to_uuid()?,
        name: name.to_string()?,
        email: email.to_option_string()?.unwrap_or_default(),
        phone: phone.to_option_string()?.unwrap_or_default(),
        created_at: created_at.to_timestamp()?,
        updated_at: updated_at.to_timestamp()?,
    })
}
