//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Carts are keyed by their owner's email, products and users by their own
/// identifiers; stores use this to derive the storage key.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
