use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

/// In-memory table keyed by entity id, shared by the memory repositories.
///
/// Every mutation takes the write lock for its whole lookup-and-change, so a
/// single insert, update or remove is atomic.
#[derive(Debug)]
pub(crate) struct MemoryTable<E> {
    name: String,
    rows: Arc<RwLock<HashMap<String, E>>>,
}

impl<E: Identifiable + Clone> MemoryTable<E> {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rows: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub(crate) async fn insert(&self, entity: &E) -> LibraryResult<E> {
        let mut row = entity.clone();
        row.assign_id(Uuid::new_v4().to_string().as_str());
        let mut rows = self.rows.write().await;
        if rows.contains_key(&row.id()) {
            return Err(LibraryError::duplicate_key(
                format!("{} already has a row with id {}", self.name, row.id()).as_str()));
        }
        rows.insert(row.id(), row.clone());
        Ok(row)
    }

    pub(crate) async fn update_with<F>(&self, id: &str, apply: F) -> LibraryResult<E>
        where F: FnOnce(&mut E) + Send {
        let mut rows = self.rows.write().await;
        match rows.get_mut(id) {
            Some(row) => {
                apply(row);
                Ok(row.clone())
            }
            None => Err(LibraryError::not_found(
                format!("{} row not found for {}", self.name, id).as_str())),
        }
    }

    pub(crate) async fn get(&self, id: &str) -> LibraryResult<E> {
        self.rows.read().await.get(id).cloned().ok_or_else(|| LibraryError::not_found(
            format!("{} row not found for {}", self.name, id).as_str()))
    }

    pub(crate) async fn remove(&self, id: &str) -> LibraryResult<usize> {
        match self.rows.write().await.remove(id) {
            Some(_) => Ok(1),
            None => Err(LibraryError::not_found(
                format!("{} row not found for {}", self.name, id).as_str())),
        }
    }

    pub(crate) async fn select<P>(&self, predicate: P) -> Vec<E>
        where P: Fn(&E) -> bool + Send {
        self.rows.read().await.values().filter(|row| predicate(row)).cloned().collect()
    }
}
