//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new entity; the store assigns the id
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Update an existing entity in place
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID (no cascade; referencing ids go stale)
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}

/// Create-or-update against any repository.
///
/// A nonzero id updates the record at that id and hands the same id back;
/// id 0 (the unsaved sentinel) inserts and returns the store-assigned id.
/// A record that genuinely carries id 0 therefore inserts - known quirk,
/// pinned by a test. Referenced foreign ids are not validated here or
/// anywhere below; that is the caller's concern.
pub async fn upsert<T, R>(repo: &R, item: &T) -> DomainResult<u32>
where
    T: Entity<Id = u32>,
    R: Repository<T> + ?Sized,
{
    if item.id() != 0 {
        repo.update(item).await?;
        Ok(item.id())
    } else {
        let created = repo.create(item).await?;
        Ok(created.id())
    }
}
