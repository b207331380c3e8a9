//! Account directory — registration and credential login.
//!
//! Accounts are keyed by email; at most one account exists per address.
//! Records are created on registration and never updated or deleted.
//! Passwords are stored as salted PBKDF2 digests, never plaintext.

pub mod password;
pub mod store;

pub use store::{AccountStore, MemoryAccountStore};

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// A registered user's credential and contact record.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub name: String,
    /// Unique key.
    pub email: String,
    pub mobile: String,
    /// Salted PBKDF2 digest. Never serialized into API responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<String>,
}

/// Registration payload. Presence is the only requirement — empty strings
/// are accepted, matching the registration form.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub address: String,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("User already exists")]
    DuplicateEmail,
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// The account directory, backed by a pluggable [`AccountStore`].
#[derive(Clone)]
pub struct AccountDirectory {
    store: Arc<dyn AccountStore>,
}

impl AccountDirectory {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Directory over the in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryAccountStore::new()))
    }

    /// Register a new account. Fails with [`DirectoryError::DuplicateEmail`]
    /// when the email is already taken.
    pub async fn register(&self, new: NewAccount) -> Result<Account, DirectoryError> {
        let account = Account {
            name: new.name,
            email: new.email,
            mobile: new.mobile,
            password_hash: password::hash(&new.password),
            address: new.address,
            latitude: new.latitude,
            longitude: new.longitude,
        };
        let account = self.store.insert(account).await?;
        info!(email = %account.email, "account registered");
        Ok(account)
    }

    /// Look up by email and verify the password against the stored digest.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller —
    /// both map to [`DirectoryError::InvalidCredentials`].
    pub async fn login(&self, email: &str, password: &str) -> Result<Account, DirectoryError> {
        let Some(account) = self.store.find_by_email(email).await else {
            warn!(email, "login rejected — unknown email");
            return Err(DirectoryError::InvalidCredentials);
        };
        if !password::verify(password, &account.password_hash) {
            warn!(email, "login rejected — password mismatch");
            return Err(DirectoryError::InvalidCredentials);
        }
        info!(email, "login successful");
        Ok(account)
    }
}
