use serde::{Deserialize, Serialize};

use cartwheel_core::{Entity, UserEmail};

/// Address placeholder given to users who never set one.
pub const DEFAULT_ADDRESS: &str = "ADDRESS_NOT_SET";

/// A shopper. Owned by the user ledger; the checkout only reads the address
/// flag and debits the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: UserEmail,
    pub name: String,
    /// Wallet balance in whole currency units.
    pub wallet_money: u64,
    #[serde(default = "default_address")]
    pub address: String,
}

fn default_address() -> String {
    DEFAULT_ADDRESS.to_string()
}

impl User {
    pub fn new(email: UserEmail, name: impl Into<String>, wallet_money: u64) -> Self {
        Self {
            email,
            name: name.into(),
            wallet_money,
            address: default_address(),
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Whether the user has explicitly set a delivery address.
    pub fn has_non_default_address(&self) -> bool {
        let address = self.address.trim();
        !address.is_empty() && address != DEFAULT_ADDRESS
    }

    /// Deduct `amount` from the wallet. Returns `false` (and leaves the
    /// balance untouched) if the wallet does not cover it.
    pub fn debit(&mut self, amount: u64) -> bool {
        match self.wallet_money.checked_sub(amount) {
            Some(left) => {
                self.wallet_money = left;
                true
            }
            None => false,
        }
    }
}

impl Entity for User {
    type Id = UserEmail;

    fn id(&self) -> &Self::Id {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(wallet: u64) -> User {
        User::new(UserEmail::parse("crio-user@gmail.com").unwrap(), "crio-user", wallet)
    }

    #[test]
    fn new_users_have_the_default_address() {
        let u = user(500);
        assert_eq!(u.address, DEFAULT_ADDRESS);
        assert!(!u.has_non_default_address());
        assert!(!u.clone().with_address("   ").has_non_default_address());
        assert!(u.with_address("ABC nagar, Delhi").has_non_default_address());
    }

    #[test]
    fn debit_never_goes_negative() {
        let mut u = user(50);
        assert!(!u.debit(200));
        assert_eq!(u.wallet_money, 50);
        assert!(u.debit(50));
        assert_eq!(u.wallet_money, 0);
    }

    #[test]
    fn json_uses_camel_case_and_fills_missing_address() {
        let u: User = serde_json::from_value(serde_json::json!({
            "email": "crio-user@gmail.com",
            "name": "crio-user",
            "walletMoney": 500
        }))
        .unwrap();
        assert_eq!(u.address, DEFAULT_ADDRESS);

        let json = serde_json::to_value(&u).unwrap();
        assert_eq!(json["walletMoney"], 500);
    }
}
