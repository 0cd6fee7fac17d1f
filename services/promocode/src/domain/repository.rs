#![allow(async_fn_in_trait)]

use uuid::Uuid;

use promocode_domain::entity::Entity;

use crate::error::PromoCodeServiceError;

/// Uniform CRUD and query access over a collection of one entity type.
///
/// Queries scan in storage order. Mutations never report "not found": callers
/// check `get_by_id` themselves when absence matters.
pub trait Repository<T: Entity>: Send + Sync {
    /// Every entity, in insertion order.
    async fn get_all(&self) -> Result<Vec<T>, PromoCodeServiceError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<T>, PromoCodeServiceError>;

    /// Entities whose id appears in `ids`. Duplicate ids collapse.
    async fn get_range_by_ids(&self, ids: &[Uuid]) -> Result<Vec<T>, PromoCodeServiceError>;

    async fn get_first_where<F>(&self, predicate: F) -> Result<Option<T>, PromoCodeServiceError>
    where
        F: Fn(&T) -> bool + Send;

    /// All matching entities; empty when nothing matches.
    async fn get_where<F>(&self, predicate: F) -> Result<Vec<T>, PromoCodeServiceError>
    where
        F: Fn(&T) -> bool + Send;

    /// Append without checking for an existing id.
    async fn add(&self, entity: T) -> Result<(), PromoCodeServiceError>;

    /// Replace the stored entity with the same id in place. No-op when absent.
    async fn update(&self, entity: T) -> Result<(), PromoCodeServiceError>;

    /// Remove the first entity with the same id. No-op when absent.
    async fn delete(&self, entity: &T) -> Result<(), PromoCodeServiceError>;

    /// Remove every entity whose id appears in `entities`.
    async fn remove_range(&self, entities: &[T]) -> Result<(), PromoCodeServiceError>;
}
