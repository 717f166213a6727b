//! Value object trait: equality by value, not identity.
//!
//! Value objects are defined entirely by their attribute values. Two value
//! objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// construct a new one with the new values.
///
/// In this workspace the inventory record (`Item`) is a value object: its
/// `(code, name, expiration date)` triple is the whole of its identity, and
/// the inventory aggregate keys its quantities by that value.
///
/// ## Usage Pattern
///
/// ```
/// use warehouse_core::ValueObject;
///
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Batch {
///     code: String,
///     lot: u32,
/// }
///
/// impl ValueObject for Batch {}
///
/// let b1 = Batch { code: "A1".to_string(), lot: 7 };
/// let b2 = Batch { code: "A1".to_string(), lot: 7 };
/// assert_eq!(b1, b2);
/// ```
pub trait ValueObject: Clone + Eq + core::fmt::Debug {}
