//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object is defined entirely by its attributes: two instances with
/// equal attributes are interchangeable. `Price { amount: 100, currency:
/// "Euro" }` is the canonical example in this domain - there is no meaningful
/// notion of "the same" hundred euros versus "another" hundred euros.
///
/// Implementors must be immutable after construction. To "change" a value
/// object, build a new one. This keeps values trivially shareable across
/// threads and lets them behave like primitives.
///
/// The supertraits encode the contract: `Clone` (values are copied, not
/// referenced), `PartialEq` (structural comparison), `Debug` (values show up
/// in logs and assertions).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
