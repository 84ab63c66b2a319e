//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own. A line item's product is a
/// snapshot taken when the item was added, so two snapshots with equal fields
/// are interchangeable even if the catalog record changed since.
///
/// The trait requires:
/// - **Clone**: value objects are copied, never shared by reference
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: needed for logging and test assertions
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
