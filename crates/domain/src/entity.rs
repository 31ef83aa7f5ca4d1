//! Core entity trait.

/// Trait for entities that have an identity and can be persisted.
pub trait Entity: Clone + Send + Sync {
    /// The identifier type of the entity.
    type Id: Clone + Eq + std::fmt::Display + Send + Sync;

    /// Human-readable entity name used in error messages ("Customer", "Order").
    const NAME: &'static str;

    /// Returns the entity's identifier.
    fn id(&self) -> &Self::Id;
}
