use async_trait::async_trait;

use cartwheel_core::{StorageError, UserEmail};
use cartwheel_users::User;

/// Store of user records. The checkout reads the wallet and address and
/// writes back the debited balance.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserLedger: Send + Sync {
    async fn find_user(&self, email: &UserEmail) -> Result<Option<User>, StorageError>;

    async fn save_user(&self, user: &User) -> Result<(), StorageError>;
}
