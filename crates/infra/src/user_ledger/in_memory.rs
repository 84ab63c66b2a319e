use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use cartwheel_core::{Entity, StorageError, UserEmail};
use cartwheel_users::User;

use super::r#trait::UserLedger;

/// In-memory user ledger for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryUserLedger {
    users: RwLock<HashMap<UserEmail, User>>,
}

impl InMemoryUserLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        let ledger = Self::new();
        for u in users {
            ledger.insert(u);
        }
        ledger
    }

    pub fn insert(&self, user: User) {
        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user.id().clone(), user);
    }
}

fn poisoned() -> StorageError {
    StorageError::unavailable("user ledger lock poisoned")
}

#[async_trait]
impl UserLedger for InMemoryUserLedger {
    async fn find_user(&self, email: &UserEmail) -> Result<Option<User>, StorageError> {
        let map = self.users.read().map_err(|_| poisoned())?;
        Ok(map.get(email).cloned())
    }

    async fn save_user(&self, user: &User) -> Result<(), StorageError> {
        let mut map = self.users.write().map_err(|_| poisoned())?;
        map.insert(user.id().clone(), user.clone());
        Ok(())
    }
}
