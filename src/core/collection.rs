//! A store plus the discipline needed to mutate it safely

use crate::core::validation::{Resolved, guard};
use crate::core::{ApiError, IdGenerator, Record, Store};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Attempts at drawing an unused id before giving up
const MAX_ID_ATTEMPTS: usize = 8;

/// One resource collection as seen by its service
///
/// Wraps the injected [`Store`] and [`IdGenerator`] with a writer lock.
/// Every create, update or delete holds the lock from the guard through the
/// final write, so the lookup, the checks and the write act as one step.
pub struct Collection<T: Record> {
    store: Arc<dyn Store<T>>,
    ids: Arc<dyn IdGenerator>,
    writer: Mutex<()>,
}

impl<T: Record> Collection<T> {
    pub fn new(store: Arc<dyn Store<T>>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store,
            ids,
            writer: Mutex::new(()),
        }
    }

    /// Serialise a mutating request; hold the guard until the write is done
    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().await
    }

    /// Snapshot of all records, insertion order
    pub async fn list(&self) -> Result<Vec<T>, ApiError> {
        Ok(self.store.list().await?)
    }

    /// Existence guard for this collection
    pub async fn resolve(&self, id: &str) -> Result<Resolved<T>, ApiError> {
        guard::resolve(self.store.as_ref(), id).await
    }

    /// Draw an identifier not used by any stored record
    pub async fn fresh_id(&self) -> Result<String, ApiError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if !self.store.contains(&id).await? {
                return Ok(id);
            }
            tracing::warn!(entity = T::label(), %id, "generated id already in use, retrying");
        }

        Err(ApiError::Internal(format!(
            "could not generate an unused {} id",
            T::label()
        )))
    }

    /// Append a new record
    pub async fn insert(&self, record: T) -> Result<T, ApiError> {
        Ok(self.store.insert(record).await?)
    }

    /// Overwrite a stored record, keyed by its id
    pub async fn replace(&self, record: T) -> Result<T, ApiError> {
        Ok(self.store.update(record).await?)
    }

    /// Remove a stored record
    pub async fn remove(&self, id: &str) -> Result<(), ApiError> {
        match self.store.remove(id).await? {
            Some(_) => Ok(()),
            None => Err(ApiError::not_found(T::label(), id)),
        }
    }

    /// Number of stored records
    pub async fn len(&self) -> Result<usize, ApiError> {
        Ok(self.store.len().await?)
    }

    /// Whether the collection is empty
    pub async fn is_empty(&self) -> Result<bool, ApiError> {
        Ok(self.store.is_empty().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::id::SequentialIdGenerator;
    use crate::storage::InMemoryStore;
    use serde::Serialize;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Item {
        id: String,
    }

    impl Record for Item {
        fn resource_name() -> &'static str {
            "items"
        }

        fn label() -> &'static str {
            "Item"
        }

        fn id(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str) -> Item {
        Item { id: id.to_string() }
    }

    fn collection(records: Vec<Item>) -> Collection<Item> {
        let store = InMemoryStore::with_records(records).unwrap();
        Collection::new(Arc::new(store), Arc::new(SequentialIdGenerator::default()))
    }

    #[tokio::test]
    async fn test_fresh_id_skips_taken_ids() {
        let items = collection(vec![item("1"), item("2")]);
        assert_eq!(items.fresh_id().await.unwrap(), "3");
    }

    #[tokio::test]
    async fn test_fresh_id_gives_up_eventually() {
        struct Constant;
        impl IdGenerator for Constant {
            fn next_id(&self) -> String {
                "same".to_string()
            }
        }

        let store = InMemoryStore::with_records(vec![item("same")]).unwrap();
        let items: Collection<Item> = Collection::new(Arc::new(store), Arc::new(Constant));

        let err = items.fresh_id().await.unwrap_err();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[tokio::test]
    async fn test_remove_missing_is_not_found() {
        let items = collection(vec![]);
        let err = items.remove("x").await.unwrap_err();
        assert_eq!(err, ApiError::not_found("Item", "x"));
    }

    #[tokio::test]
    async fn test_insert_replace_remove() {
        let items = collection(vec![]);
        assert!(items.is_empty().await.unwrap());

        items.insert(item("a")).await.unwrap();
        items.replace(item("a")).await.unwrap();
        assert_eq!(items.len().await.unwrap(), 1);
        assert_eq!(items.resolve("a").await.unwrap().record, item("a"));

        items.remove("a").await.unwrap();
        assert!(items.resolve("a").await.is_err());
    }

    #[tokio::test]
    async fn test_lock_is_exclusive() {
        let items = collection(vec![]);
        let held = items.lock().await;
        assert!(items.writer.try_lock().is_err());
        drop(held);
        assert!(items.writer.try_lock().is_ok());
    }
}
