//! Per-user mutual exclusion.
//!
//! Cart stores are last-writer-wins, so two requests mutating the same cart
//! could lose an update. Every cart mutation and checkout takes the owner's
//! lock first; different users never contend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use cartwheel_core::UserEmail;

/// Lazily created async lock per user email.
#[derive(Debug, Default)]
pub struct UserLocks {
    locks: Mutex<HashMap<UserEmail, Arc<AsyncMutex<()>>>>,
}

/// Held for the duration of one cart operation; released on drop.
#[derive(Debug)]
pub struct UserLockGuard {
    _guard: OwnedMutexGuard<()>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `email`'s cart.
    pub async fn acquire(&self, email: &UserEmail) -> UserLockGuard {
        let lock = {
            // The map only holds Arcs; a panic while it was held cannot leave
            // it half-updated, so recover from poisoning.
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            // Entries referenced only by the map are idle.
            locks.retain(|_, l| Arc::strong_count(l) > 1);
            locks
                .entry(email.clone())
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };

        UserLockGuard {
            _guard: lock.lock_owned().await,
        }
    }

    /// Number of users with a live lock entry.
    pub fn tracked(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
