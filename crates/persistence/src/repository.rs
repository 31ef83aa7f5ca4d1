use async_trait::async_trait;
use domain::Entity;

use crate::Result;

/// Core trait for entity repositories.
///
/// A repository persists whole entities and rebuilds them on lookup.
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Stores a new entity.
    ///
    /// Fails with `AlreadyExists` if an entity with the same id is stored.
    async fn create(&self, entity: &E) -> Result<()>;

    /// Replaces the stored state of an existing entity.
    ///
    /// Fails with `NotFound` if the entity was never created.
    async fn update(&self, entity: &E) -> Result<()>;

    /// Loads an entity by id.
    ///
    /// Fails with `NotFound` if no such entity exists.
    async fn find(&self, id: &E::Id) -> Result<E>;

    /// Loads every stored entity, oldest first.
    async fn find_all(&self) -> Result<Vec<E>>;
}
