//! Startup fixtures for the in-memory catalog and user ledger.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use cartwheel_products::Product;
use cartwheel_users::User;

/// `{ "products": [...], "users": [...] }`; both lists are optional.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl SeedData {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("seed fixture is not valid JSON")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed fixture {}", path.display()))?;
        let seed = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.display(),
            products = seed.products.len(),
            users = seed.users.len(),
            "seed fixture loaded"
        );
        Ok(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fixture_and_fills_defaults() {
        let seed = SeedData::from_json(
            r#"{
                "products": [
                    { "_id": "BW0jAAeDJmlZCF8i", "name": "Atomberg Renesa Ceiling Fan", "category": "Home & Kitchen", "cost": 200, "rating": 4 }
                ],
                "users": [
                    { "email": "crio-user@gmail.com", "name": "crio-user", "walletMoney": 500 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(seed.products.len(), 1);
        assert_eq!(seed.products[0].rating, 4);
        assert!(!seed.users[0].has_non_default_address());
    }

    #[test]
    fn users_with_malformed_emails_are_rejected() {
        for email in ["", "crio-user"] {
            let raw = serde_json::json!({
                "users": [{ "email": email, "name": "x", "walletMoney": 1 }]
            })
            .to_string();
            assert!(SeedData::from_json(&raw).is_err(), "{email:?} should not load");
        }
    }

    #[test]
    fn missing_lists_are_empty() {
        let seed = SeedData::from_json("{}").unwrap();
        assert!(seed.products.is_empty());
        assert!(seed.users.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = SeedData::load(Path::new("/nonexistent/cartwheel-seed.json")).unwrap_err();
        assert!(err.to_string().contains("cartwheel-seed.json"));
    }
}
