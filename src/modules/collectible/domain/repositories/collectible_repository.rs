use async_trait::async_trait;

use crate::modules::collectible::domain::entities::Collectible;
use crate::modules::collectible::domain::value_objects::ImageData;
use crate::shared::errors::AppResult;

/// Durable local store of collectibles, one record per id, surviving
/// restarts.
///
/// Not-found on a write is surfaced as `Ok(false)` rather than an error; the
/// caller decides whether that matters. Store-level failures (lost
/// connection, corrupt database) are `Err`.
#[async_trait]
pub trait CollectibleRepository: Send + Sync {
    /// Every persisted record. Best-effort: a record whose encoded fields
    /// can no longer be decoded degrades those fields to absent instead of
    /// failing the whole load.
    async fn load_all(&self) -> AppResult<Vec<Collectible>>;

    /// Insert or replace the record keyed by `item.id`. Id uniqueness is
    /// enforced by the store, so saving an existing id updates it in place.
    async fn save(&self, item: &Collectible) -> AppResult<Collectible>;

    /// Full-record update of an existing item. Returns `false` (and writes
    /// nothing) when the id does not exist.
    async fn update(&self, item: &Collectible) -> AppResult<bool>;

    /// Rewrites only the gallery of the matching record, leaving every other
    /// field untouched. Gallery images are fetched lazily and independently
    /// of the rest of the record.
    async fn update_gallery(&self, id: &str, images: &[ImageData]) -> AppResult<bool>;

    /// Removes the record with this id; `false` when absent.
    async fn delete(&self, id: &str) -> AppResult<bool>;

    /// Point lookup by id.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Collectible>>;

    /// Existence check by id.
    async fn contains(&self, id: &str) -> AppResult<bool>;

    /// Deletes every record and returns how many were removed. Used for full
    /// collection reset and logout.
    async fn clear(&self) -> AppResult<usize>;
}
