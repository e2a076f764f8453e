//! Entity trait: objects addressed by a stable identifier.

/// Minimal entity interface.
///
/// Unlike a [`crate::ValueObject`], an entity carries an identity that is
/// meaningful on its own. Identifiers in this domain are small `Copy`
/// newtypes, so `id` returns by value.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// The entity's identifier.
    fn id(&self) -> Self::Id;
}
