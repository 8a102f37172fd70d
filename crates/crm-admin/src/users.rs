//! Operator account management.
//!
//! Input is validated before anything is stored. Passwords are hashed on the
//! way in and never leave the store in plain text.

use crate::{CrmUser, Db, NewUser, PasswordHash, Result, UserUpdate};

use crm_core::Error;
use uuid::Uuid;

const MIN_PASSWORD_LEN: usize = 6;
const MIN_PHONE_LEN: usize = 10;

/// Every field is required.
#[derive(Debug, Default, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone_number: String,
}

/// A partial update. Each supplied field is validated like on create.
#[derive(Debug, Default, Clone)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug)]
pub struct UserAdmin<'a> {
    db: &'a Db,
}

impl<'a> UserAdmin<'a> {
    pub(crate) fn new(db: &'a Db) -> UserAdmin<'a> {
        UserAdmin { db }
    }

    pub async fn create(&self, user: CreateUser) -> Result<CrmUser> {
        let new = NewUser {
            email: validate_email(&user.email)?,
            password_hash: hash_password(&user.password)?,
            name: Some(validate_name(&user.name)?),
            phone_number: Some(validate_phone_number(&user.phone_number)?),
        };

        let user = self.db.metadata().await.create_user(new).await?;
        tracing::info!(id = %user.id, email = %user.email, "user created");
        Ok(user)
    }

    /// All users, newest first.
    pub async fn list(&self) -> Result<Vec<CrmUser>> {
        self.db.metadata().await.all_users().await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<CrmUser>> {
        self.db.metadata().await.user_by_email(email.trim()).await
    }

    pub async fn update(&self, id: Uuid, user: UpdateUser) -> Result<CrmUser> {
        let update = UserUpdate {
            email: user.email.as_deref().map(validate_email).transpose()?,
            password_hash: user.password.as_deref().map(hash_password).transpose()?,
            name: user.name.as_deref().map(validate_name).transpose()?,
            phone_number: user
                .phone_number
                .as_deref()
                .map(validate_phone_number)
                .transpose()?,
        };

        let user = self.db.metadata().await.update_user(id, update).await?;
        tracing::info!(id = %user.id, "user updated");
        Ok(user)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.db.metadata().await.delete_user(id).await?;
        tracing::info!(%id, "user deleted");
        Ok(())
    }
}

/// Accepts `local@domain.tld` shapes: one `@`, no whitespace, and a `.` inside
/// the domain.
fn validate_email(email: &str) -> Result<String> {
    let email = email.trim();

    if email.is_empty() {
        return Err(Error::validation_empty("email"));
    }

    let invalid =
        |reason: &str| -> Result<String> { Err(Error::validation_invalid("email", reason)) };

    if email.chars().any(char::is_whitespace) {
        return invalid("contains whitespace");
    }

    let Some((local, domain)) = email.split_once('@') else {
        return invalid("missing `@`");
    };

    if local.is_empty() || domain.contains('@') {
        return invalid("expected `local@domain`");
    }

    let dotted = domain
        .char_indices()
        .any(|(i, ch)| ch == '.' && i > 0 && i + 1 < domain.len());

    if !dotted {
        return invalid("domain has no `.`");
    }

    Ok(email.to_string())
}

fn hash_password(password: &str) -> Result<PasswordHash> {
    if password.is_empty() {
        return Err(Error::validation_empty("password"));
    }

    let len = password.chars().count();
    if len < MIN_PASSWORD_LEN {
        return Err(Error::validation_too_short("password", len, MIN_PASSWORD_LEN));
    }

    Ok(PasswordHash::new(password))
}

fn validate_name(name: &str) -> Result<String> {
    match name.trim() {
        "" => Err(Error::validation_empty("name")),
        name => Ok(name.to_string()),
    }
}

/// Digits, spaces and `-+()` only, at least ten characters.
fn validate_phone_number(phone_number: &str) -> Result<String> {
    let phone_number = phone_number.trim();

    if phone_number.is_empty() {
        return Err(Error::validation_empty("phone number"));
    }

    let allowed = |ch: char| ch.is_ascii_digit() || " -+()".contains(ch);

    if let Some(ch) = phone_number.chars().find(|ch| !allowed(*ch)) {
        return Err(Error::validation_invalid(
            "phone number",
            format!("unexpected character `{ch}`"),
        ));
    }

    let len = phone_number.chars().count();
    if len < MIN_PHONE_LEN {
        return Err(Error::validation_too_short("phone number", len, MIN_PHONE_LEN));
    }

    Ok(phone_number.to_string())
}
