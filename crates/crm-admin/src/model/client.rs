use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The built-in fields of a client record.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ClientUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
