//! Storage abstraction for record collections

use crate::core::entity::Record;
use anyhow::Result;
use async_trait::async_trait;

/// Store trait for one collection of records
///
/// Implementations keep records in insertion order and make every single
/// call atomic. Multi-step read-modify-write sequences are serialised one
/// level up, by [`Collection`](crate::core::collection::Collection).
#[async_trait]
pub trait Store<T: Record>: Send + Sync {
    /// Snapshot of all records, in insertion order
    async fn list(&self) -> Result<Vec<T>>;

    /// Find a record by identifier
    async fn find(&self, id: &str) -> Result<Option<T>>;

    /// Append a new record; fails if the identifier is already taken
    async fn insert(&self, record: T) -> Result<T>;

    /// Replace an existing record in place, keeping its position
    async fn update(&self, record: T) -> Result<T>;

    /// Remove a record, returning it if it existed
    async fn remove(&self, id: &str) -> Result<Option<T>>;

    /// Number of records currently stored
    async fn len(&self) -> Result<usize> {
        Ok(self.list().await?.len())
    }

    /// Whether the collection holds no records
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }

    /// Whether a record with this identifier exists
    async fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.find(id).await?.is_some())
    }
}
