//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity is defined by its identifier, not its attributes: a product
/// whose price or stock changes is still the same product. Contrast with
/// [`crate::ValueObject`], where only the values matter.
pub trait Entity {
    /// Strongly-typed entity identifier (here, a product id).
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
