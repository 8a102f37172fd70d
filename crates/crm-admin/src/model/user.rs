use crate::PasswordHash;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// An operator account, a row of `crm_users`.
#[derive(Debug, Clone, PartialEq)]
pub struct CrmUser {
    pub id: Uuid,
    pub email: String,
    pub password_hash: PasswordHash,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: PasswordHash,
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

/// A partial update of a user. `None` leaves a field unchanged.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub password_hash: Option<PasswordHash>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.password_hash.is_none()
            && self.name.is_none()
            && self.phone_number.is_none()
    }
}
