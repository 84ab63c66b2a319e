//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier failed validation while parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid {kind}: {reason}")]
pub struct InvalidId {
    pub kind: &'static str,
    pub reason: &'static str,
}

/// Email of a user; the key a cart is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserEmail(String);

/// Identifier of a catalog product (opaque document id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            pub fn as_str(&self) -> &str {
                &self.0
            }

        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        // Deserialized ids go through the same checks as `parse`.
        impl TryFrom<String> for $t {
            type Error = InvalidId;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }
    };
}

impl_string_newtype!(UserEmail);
impl_string_newtype!(ProductId);

impl UserEmail {
    /// Build an email key, normalising surrounding whitespace.
    ///
    /// Only the shape is checked (non-empty, contains `@`); whether the user
    /// exists is the ledger's business.
    pub fn parse(raw: &str) -> Result<Self, InvalidId> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidId {
                kind: "UserEmail",
                reason: "must not be empty",
            });
        }
        if !trimmed.contains('@') {
            return Err(InvalidId {
                kind: "UserEmail",
                reason: "must contain '@'",
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl ProductId {
    pub fn parse(raw: &str) -> Result<Self, InvalidId> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidId {
                kind: "ProductId",
                reason: "must not be empty",
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl FromStr for UserEmail {
    type Err = InvalidId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromStr for ProductId {
    type Err = InvalidId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
