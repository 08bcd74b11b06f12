use std::sync::Arc;

use serde_json::Value;

use crate::modules::collectible::domain::entities::Collectible;
use crate::modules::collectible::domain::repositories::CollectibleRepository;
use crate::modules::collectible::domain::value_objects::ImageData;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

/// Owns the user-facing mutation flows over the collectible store. The UI
/// layer only ever calls these operations and reads the entity's derived
/// values; it holds no business logic itself.
pub struct CollectionService {
    repo: Arc<dyn CollectibleRepository>,
}

impl CollectionService {
    pub fn new(repo: Arc<dyn CollectibleRepository>) -> Self {
        Self { repo }
    }

    /// Upserts a (typically freshly classified) item into the permanent
    /// collection.
    pub async fn add_to_collection(&self, mut item: Collectible) -> AppResult<Collectible> {
        item.in_collection = true;
        let saved = self.repo.save(&item).await?;
        log_info!("Added '{}' to the collection", saved.attributes.name);
        Ok(saved)
    }

    pub async fn remove(&self, id: &str) -> AppResult<bool> {
        self.repo.delete(id).await
    }

    pub async fn collection(&self) -> AppResult<Vec<Collectible>> {
        self.repo.load_all().await
    }

    pub async fn get(&self, id: &str) -> AppResult<Option<Collectible>> {
        self.repo.find_by_id(id).await
    }

    pub async fn contains(&self, id: &str) -> AppResult<bool> {
        self.repo.contains(id).await
    }

    pub async fn clear_collection(&self) -> AppResult<usize> {
        self.repo.clear().await
    }

    /// Records what the user paid for an item.
    pub async fn record_purchase(
        &self,
        id: &str,
        price: f64,
        date: Option<String>,
    ) -> AppResult<Collectible> {
        Validator::validate_price(price)?;

        let mut item = self.require(id).await?;
        item.set_price_paid(price);
        if let Some(date) = date {
            item.set_purchase_date(date);
        }
        self.repo.update(&item).await?;
        Ok(item)
    }

    /// The normal "mark as sold" flow: price, details and the sold flag are
    /// set together.
    pub async fn mark_sold(
        &self,
        id: &str,
        price: f64,
        date: Option<String>,
        platform: Option<String>,
    ) -> AppResult<Collectible> {
        Validator::validate_price(price)?;

        let mut item = self.require(id).await?;
        item.record_sale(price, date, platform);
        self.repo.update(&item).await?;
        log_debug!("Marked {} as sold", id);
        Ok(item)
    }

    /// "Unsell": drops the whole sale record, leaving the rest of the user
    /// data intact.
    pub async fn unmark_sold(&self, id: &str) -> AppResult<Collectible> {
        let mut item = self.require(id).await?;
        item.clear_sale();
        self.repo.update(&item).await?;
        Ok(item)
    }

    /// Overrides the series/subject shown for an item; replaces any earlier
    /// manual selection while keeping the AI classification.
    pub async fn select_subject(
        &self,
        id: &str,
        name: &str,
        url: Option<String>,
    ) -> AppResult<Collectible> {
        Validator::validate_item_name(name)?;

        let mut item = self.require(id).await?;
        item.select_subject(name, url);
        self.repo.update(&item).await?;
        Ok(item)
    }

    /// Writes lazily fetched gallery images without touching any other field
    /// of the record.
    pub async fn merge_gallery(&self, id: &str, images: Vec<ImageData>) -> AppResult<bool> {
        self.repo.update_gallery(id, &images).await
    }

    pub async fn add_user_photo(&self, id: &str, photo: ImageData) -> AppResult<Collectible> {
        let mut item = self.require(id).await?;
        item.add_user_photo(photo);
        self.repo.update(&item).await?;
        Ok(item)
    }

    pub async fn remove_user_photo(&self, id: &str, url: &str) -> AppResult<Collectible> {
        let mut item = self.require(id).await?;
        if item.remove_user_photo(url) {
            self.repo.update(&item).await?;
        }
        Ok(item)
    }

    /// The pruned outbound form for the manage-collection endpoint.
    pub async fn export_payload(&self, id: &str) -> AppResult<Value> {
        let item = self.require(id).await?;
        Ok(item.to_payload())
    }

    async fn require(&self, id: &str) -> AppResult<Collectible> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Collectible with id {} not found", id)))
    }
}
