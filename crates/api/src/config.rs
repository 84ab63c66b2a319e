//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use cartwheel_carts::{CheckoutPricing, PaymentOption};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8082";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("BIND_ADDR '{0}' is not a socket address")]
    BindAddr(String),

    #[error("CHECKOUT_PRICING: {0}")]
    Pricing(String),

    #[error("PAYMENT_OPTION_DEFAULT must not be empty")]
    EmptyPaymentOption,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Payment option given to carts created on first add.
    pub default_payment_option: PaymentOption,
    pub pricing: CheckoutPricing,
    /// Optional JSON fixture with products and users for the in-memory stores.
    pub seed_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8082)),
            default_payment_option: PaymentOption::default(),
            pricing: CheckoutPricing::default(),
            seed_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::BindAddr(raw.clone()))?,
            None => {
                tracing::warn!("BIND_ADDR not set; using {DEFAULT_BIND_ADDR}");
                AppConfig::default().bind_addr
            }
        };

        let default_payment_option = match lookup("PAYMENT_OPTION_DEFAULT") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyPaymentOption),
            Some(raw) => PaymentOption::new(raw.trim()),
            None => PaymentOption::default(),
        };

        let pricing = match lookup("CHECKOUT_PRICING") {
            Some(raw) => raw.parse().map_err(ConfigError::Pricing)?,
            None => CheckoutPricing::default(),
        };

        let seed_path = lookup("SEED_PATH")
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            default_payment_option,
            pricing,
            seed_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(cfg.pricing, CheckoutPricing::LastLineItem);
    }

    #[test]
    fn reads_every_key() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("PAYMENT_OPTION_DEFAULT", "PAYMENT_OPTION_WALLET"),
            ("CHECKOUT_PRICING", "sum"),
            ("SEED_PATH", "/tmp/seed.json"),
        ]))
        .unwrap();

        assert_eq!(cfg.bind_addr.port(), 9000);
        assert_eq!(cfg.default_payment_option.as_str(), "PAYMENT_OPTION_WALLET");
        assert_eq!(cfg.pricing, CheckoutPricing::SumOfLineItems);
        assert_eq!(cfg.seed_path, Some(PathBuf::from("/tmp/seed.json")));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("BIND_ADDR", "nope")])),
            Err(ConfigError::BindAddr(_))
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("CHECKOUT_PRICING", "average")])),
            Err(ConfigError::Pricing(_))
        ));
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("PAYMENT_OPTION_DEFAULT", "  ")])),
            Err(ConfigError::EmptyPaymentOption)
        );
    }
}
