//! In-memory implementation of Store for development, tests and demos

use crate::core::{Record, Store};
use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory store implementation
///
/// Records live for the lifetime of the process. An `IndexMap` keeps both
/// insertion order (for listing) and constant-time lookup by id.
#[derive(Clone)]
pub struct InMemoryStore<T> {
    records: Arc<RwLock<IndexMap<String, T>>>,
}

impl<T: Record> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Create a store pre-populated with `records`, in the given order
    ///
    /// Fails if two records share an identifier.
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Result<Self> {
        let mut map = IndexMap::new();
        for record in records {
            let id = record.id().to_string();
            if map.insert(id.clone(), record).is_some() {
                bail!("duplicate {} id '{}'", T::label(), id);
            }
        }

        Ok(Self {
            records: Arc::new(RwLock::new(map)),
        })
    }
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Store<T> for InMemoryStore<T> {
    async fn list(&self) -> Result<Vec<T>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn find(&self, id: &str) -> Result<Option<T>> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn insert(&self, record: T) -> Result<T> {
        let mut records = self.records.write().await;

        if records.contains_key(record.id()) {
            bail!("{} with id '{}' already exists", T::label(), record.id());
        }

        records.insert(record.id().to_string(), record.clone());
        Ok(record)
    }

    async fn update(&self, record: T) -> Result<T> {
        let mut records = self.records.write().await;

        let slot = records
            .get_mut(record.id())
            .ok_or_else(|| anyhow!("{} with id '{}' not found", T::label(), record.id()))?;
        *slot = record.clone();

        Ok(record)
    }

    async fn remove(&self, id: &str) -> Result<Option<T>> {
        let mut records = self.records.write().await;
        // shift_remove keeps the remaining records in insertion order
        Ok(records.shift_remove(id))
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.records.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Note {
        id: String,
        body: String,
    }

    impl Record for Note {
        fn resource_name() -> &'static str {
            "notes"
        }

        fn label() -> &'static str {
            "Note"
        }

        fn id(&self) -> &str {
            &self.id
        }
    }

    fn note(id: &str, body: &str) -> Note {
        Note {
            id: id.to_string(),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = InMemoryStore::new();
        store.insert(note("1", "hello")).await.unwrap();

        let found = store.find("1").await.unwrap();
        assert_eq!(found, Some(note("1", "hello")));
        assert!(store.find("2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_duplicate_id_fails() {
        let store = InMemoryStore::new();
        store.insert(note("1", "a")).await.unwrap();

        let err = store.insert(note("1", "b")).await.unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(store.find("1").await.unwrap().unwrap().body, "a");
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = InMemoryStore::new();
        for id in ["c", "a", "b"] {
            store.insert(note(id, id)).await.unwrap();
        }

        let ids: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let store = InMemoryStore::with_records(vec![note("1", "a"), note("2", "b")]).unwrap();

        store.update(note("1", "changed")).await.unwrap();

        let all = store.list().await.unwrap();
        assert_eq!(all[0], note("1", "changed"));
        assert_eq!(all[1], note("2", "b"));
    }

    #[tokio::test]
    async fn test_update_missing_fails() {
        let store: InMemoryStore<Note> = InMemoryStore::new();
        assert!(store.update(note("9", "x")).await.is_err());
        assert!(store.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn test_remove_preserves_order_of_the_rest() {
        let store =
            InMemoryStore::with_records(vec![note("1", "a"), note("2", "b"), note("3", "c")])
                .unwrap();

        let removed = store.remove("2").await.unwrap();
        assert_eq!(removed, Some(note("2", "b")));
        assert!(store.remove("2").await.unwrap().is_none());

        let ids: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(store.len().await.unwrap(), 2);
    }

    #[test]
    fn test_with_records_rejects_duplicates() {
        let result = InMemoryStore::with_records(vec![note("1", "a"), note("1", "b")]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryStore::new();
        let other = store.clone();
        store.insert(note("1", "a")).await.unwrap();
        assert!(other.contains("1").await.unwrap());
    }
}
