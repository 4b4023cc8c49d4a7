//! In-process record store, used by tests and `STORE_BACKEND=memory`.

use super::{Document, Repository, StoreError};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

pub struct InMemoryRepository<E: Document> {
    records: RwLock<HashMap<Uuid, E>>,
}

impl<E: Document> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    fn sorted(mut records: Vec<E>) -> Vec<E> {
        records.sort_by_key(|e| (e.created_date(), e.id()));
        records
    }
}

impl<E: Document> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Document> Repository<E> for InMemoryRepository<E> {
    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.records.read().await.len() as u64)
    }

    async fn find_all(&self) -> Result<Vec<E>, StoreError> {
        let records = self.records.read().await;
        Ok(Self::sorted(records.values().cloned().collect()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<E>, StoreError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn find_by_field(&self, field: E::Field, value: &str) -> Result<Vec<E>, StoreError> {
        let records = self.records.read().await;
        let matching = records
            .values()
            .filter(|e| e.field(field) == Some(value))
            .cloned()
            .collect();
        Ok(Self::sorted(matching))
    }

    async fn save(&self, mut entity: E) -> Result<E, StoreError> {
        let mut records = self.records.write().await;
        let id = entity.stamp(Utc::now());
        records.insert(id, entity.clone());
        Ok(entity)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError> {
        self.records.write().await.remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        debug!(collection = E::COLLECTION, removed = records.len(), "cleared collection");
        records.clear();
        Ok(())
    }
}
