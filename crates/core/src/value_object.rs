//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two with the
/// same attribute values are the same value. Contrast with an entity, where
/// two instances sharing an id are the same entity regardless of attributes.
///
/// [`crate::Money`] is the canonical example here: `Money::from_cents(150)`
/// equals any other `Money::from_cents(150)`, while two distinct products can
/// both carry that price without being related.
///
/// The bounds keep value objects cheap to copy around, comparable, and
/// debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
