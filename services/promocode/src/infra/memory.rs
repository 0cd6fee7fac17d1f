use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;
use uuid::Uuid;

use promocode_domain::entity::Entity;

use crate::domain::repository::Repository;
use crate::error::PromoCodeServiceError;

/// Process-memory store for one entity type.
///
/// Clones share the same backing collection.
pub struct InMemoryRepository<T> {
    data: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> InMemoryRepository<T> {
    pub fn new(data: impl IntoIterator<Item = T>) -> Self {
        Self {
            data: Arc::new(RwLock::new(data.into_iter().collect())),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<T>>, PromoCodeServiceError> {
        self.data
            .read()
            .map_err(|_| anyhow!("in-memory collection lock poisoned").into())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<T>>, PromoCodeServiceError> {
        self.data
            .write()
            .map_err(|_| anyhow!("in-memory collection lock poisoned").into())
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn get_all(&self) -> Result<Vec<T>, PromoCodeServiceError> {
        Ok(self.read()?.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<T>, PromoCodeServiceError> {
        Ok(self.read()?.iter().find(|e| e.id() == id).cloned())
    }

    async fn get_range_by_ids(&self, ids: &[Uuid]) -> Result<Vec<T>, PromoCodeServiceError> {
        let ids: HashSet<Uuid> = ids.iter().copied().collect();
        Ok(self
            .read()?
            .iter()
            .filter(|e| ids.contains(&e.id()))
            .cloned()
            .collect())
    }

    async fn get_first_where<F>(&self, predicate: F) -> Result<Option<T>, PromoCodeServiceError>
    where
        F: Fn(&T) -> bool + Send,
    {
        Ok(self.read()?.iter().find(|&e| predicate(e)).cloned())
    }

    async fn get_where<F>(&self, predicate: F) -> Result<Vec<T>, PromoCodeServiceError>
    where
        F: Fn(&T) -> bool + Send,
    {
        Ok(self
            .read()?
            .iter()
            .filter(|&e| predicate(e))
            .cloned()
            .collect())
    }

    async fn add(&self, entity: T) -> Result<(), PromoCodeServiceError> {
        self.write()?.push(entity);
        Ok(())
    }

    async fn update(&self, entity: T) -> Result<(), PromoCodeServiceError> {
        let mut data = self.write()?;
        if let Some(slot) = data.iter_mut().find(|e| e.id() == entity.id()) {
            *slot = entity;
        }
        Ok(())
    }

    async fn delete(&self, entity: &T) -> Result<(), PromoCodeServiceError> {
        let mut data = self.write()?;
        if let Some(pos) = data.iter().position(|e| e.id() == entity.id()) {
            data.remove(pos);
        }
        Ok(())
    }

    async fn remove_range(&self, entities: &[T]) -> Result<(), PromoCodeServiceError> {
        let ids: HashSet<Uuid> = entities.iter().map(Entity::id).collect();
        self.write()?.retain(|e| !ids.contains(&e.id()));
        Ok(())
    }
}
