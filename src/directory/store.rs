//! Storage seam for the account directory.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{Account, DirectoryError};

/// Backend-agnostic account storage: insert-if-absent plus lookup by the
/// unique email key. A persistent implementation can be swapped in without
/// touching the directory call sites.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new account. Fails with `DuplicateEmail` when the email is
    /// already taken.
    async fn insert(&self, account: Account) -> Result<Account, DirectoryError>;

    /// Look up an account by its email key.
    async fn find_by_email(&self, email: &str) -> Option<Account>;
}

/// In-memory store, keyed by email.
#[derive(Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn insert(&self, account: Account) -> Result<Account, DirectoryError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.email) {
            return Err(DirectoryError::DuplicateEmail);
        }
        accounts.insert(account.email.clone(), account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Option<Account> {
        self.accounts.read().await.get(email).cloned()
    }
}
