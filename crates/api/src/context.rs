use cartwheel_core::UserEmail;
use cartwheel_users::User;

/// The authenticated shopper for a request.
///
/// Resolved from the user ledger by the identity middleware and present on
/// every cart route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopperContext {
    user: User,
}

impl ShopperContext {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn email(&self) -> &UserEmail {
        &self.user.email
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}
