use super::{now, MetadataStore};
use crate::{
    tables::crm_users::{self, CREATED_AT, EMAIL, PASSWORD_HASH, PHONE_NUMBER, USER_NAME},
    CrmUser, NewUser, PasswordHash, Result, UserUpdate,
};

use crm_core::stmt::{Filter, OrderBy, Value, ValueRecord};
use uuid::Uuid;

impl MetadataStore<'_> {
    pub async fn create_user(&mut self, new: NewUser) -> Result<CrmUser> {
        let created_at = now();

        let user = CrmUser {
            id: Uuid::new_v4(),
            email: new.email,
            password_hash: new.password_hash,
            name: new.name,
            phone_number: new.phone_number,
            created_at,
            updated_at: created_at,
        };

        let values = vec![
            user.id.into(),
            user.email.as_str().into(),
            user.password_hash.to_string().into(),
            user.name.clone().into(),
            user.phone_number.clone().into(),
            user.created_at.into(),
            user.updated_at.into(),
        ];

        self.insert(self.tables.crm_users, values).await?;
        Ok(user)
    }

    /// All users, newest first.
    pub async fn all_users(&mut self) -> Result<Vec<CrmUser>> {
        self.select(self.tables.crm_users, None, Some(OrderBy::desc(CREATED_AT)))
            .await?
            .into_iter()
            .map(user_from_record)
            .collect()
    }

    pub async fn user_by_id(&mut self, id: Uuid) -> Result<Option<CrmUser>> {
        self.select_one(self.tables.crm_users, Filter::eq(crm_users::ID, id))
            .await?
            .map(user_from_record)
            .transpose()
    }

    pub async fn user_by_email(&mut self, email: &str) -> Result<Option<CrmUser>> {
        self.select_one(self.tables.crm_users, Filter::eq(EMAIL, email))
            .await?
            .map(user_from_record)
            .transpose()
    }

    /// Applies a partial update, refreshing `updated_at`.
    pub async fn update_user(&mut self, id: Uuid, update: UserUpdate) -> Result<CrmUser> {
        let mut assignments = vec![];

        if let Some(email) = update.email {
            assignments.push((EMAIL, Value::from(email)));
        }

        if let Some(password_hash) = update.password_hash {
            assignments.push((PASSWORD_HASH, Value::from(password_hash.to_string())));
        }

        if let Some(name) = update.name {
            assignments.push((USER_NAME, Value::from(name)));
        }

        if let Some(phone_number) = update.phone_number {
            assignments.push((PHONE_NUMBER, Value::from(phone_number)));
        }

        assignments.push((crm_users::UPDATED_AT, Value::from(now())));

        self.update_by_id(self.tables.crm_users, id, assignments)
            .await?;

        match self.user_by_id(id).await? {
            Some(user) => Ok(user),
            None => Err(self.not_found(self.tables.crm_users, id)),
        }
    }

    pub async fn delete_user(&mut self, id: Uuid) -> Result<()> {
        self.delete_by_id(self.tables.crm_users, id).await
    }
}

fn user_from_record(record: ValueRecord) -> Result<CrmUser> {
    let [id, email, password_hash, name, phone_number, created_at, updated_at] =
        record.into_array::<{ crm_users::WIDTH }>()?;

    Ok(CrmUser {
        id: id.to_uuid()?,
        email: email.to_string()?,
        password_hash: password_hash.to_string()?.parse::<PasswordHash>()?,
        name: name.to_option_string()?,
        phone_number: phone_number.to_option_string()?,
        created_at: created_at.to_timestamp()?,
        updated_at: updated_at.to_timestamp()?,
    })
}
