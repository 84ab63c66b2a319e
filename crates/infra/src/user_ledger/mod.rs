//! User ledger boundary: wallet balances and address status.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryUserLedger;
pub use r#trait::UserLedger;

#[cfg(test)]
pub use r#trait::MockUserLedger;
