use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use tokio::task;

use crate::log_debug;
use crate::modules::collectible::domain::entities::{Collectible, CollectibleAttributes};
use crate::modules::collectible::domain::repositories::CollectibleRepository;
use crate::modules::collectible::domain::value_objects::{CollectibleImages, ImageData};
use crate::modules::collectible::infrastructure::models::{
    decode_blob, encode_blob, CollectibleChangeset, CollectibleRecord, NewCollectible,
};
use crate::schema::collectibles;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;
use crate::shared::Database;

pub struct CollectibleRepositoryImpl {
    db: Arc<Database>,
}

impl CollectibleRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    // Helper: Convert a stored row back into the domain entity. Infallible:
    // blob columns that no longer decode degrade to absent.
    fn model_to_entity(record: CollectibleRecord) -> Collectible {
        Collectible {
            id: record.id,
            attributes: CollectibleAttributes {
                images: CollectibleImages {
                    main: decode_blob("main_image", record.main_image),
                    search: decode_blob("search_image", record.search_image),
                    search_no_bg: decode_blob("search_no_bg_image", record.search_no_bg_image),
                    gallery: decode_blob("gallery", record.gallery).unwrap_or_default(),
                },
                name: record.name,
                estimated_value: record.estimated_value,
                estimated_value_range: decode_blob(
                    "estimated_value_range",
                    record.estimated_value_range,
                ),
                related_subjects: decode_blob("related_subjects", record.related_subjects),
                date_from: record.date_from,
                production_status: decode_blob("production_status", record.production_status),
                ref_number: record.ref_number,
                selected_type: record.selected_type,
            },
            custom_attributes: decode_blob("custom_attributes", record.custom_attributes),
            in_collection: record.in_collection,
        }
    }

    // Helper: Convert the entity to an insertable row.
    fn entity_to_new_model(entity: &Collectible) -> NewCollectible {
        let now = Utc::now();
        NewCollectible {
            id: entity.id.clone(),
            name: entity.attributes.name.clone(),
            estimated_value: entity.attributes.estimated_value.clone(),
            estimated_value_range: entity
                .attributes
                .estimated_value_range
                .as_ref()
                .and_then(encode_blob),
            date_from: entity.attributes.date_from.clone(),
            production_status: entity
                .attributes
                .production_status
                .as_ref()
                .and_then(encode_blob),
            ref_number: entity.attributes.ref_number.clone(),
            selected_type: entity.attributes.selected_type.clone(),
            main_image: entity.attributes.images.main.as_ref().and_then(encode_blob),
            search_image: entity
                .attributes
                .images
                .search
                .as_ref()
                .and_then(encode_blob),
            search_no_bg_image: entity
                .attributes
                .images
                .search_no_bg
                .as_ref()
                .and_then(encode_blob),
            gallery: encode_gallery(&entity.attributes.images.gallery),
            related_subjects: entity
                .attributes
                .related_subjects
                .as_ref()
                .and_then(encode_blob),
            custom_attributes: entity.custom_attributes.as_ref().and_then(encode_blob),
            in_collection: entity.in_collection,
            created_at: now,
            updated_at: now,
        }
    }

    // Helper: Convert the entity to a full-field changeset for updates.
    fn entity_to_changeset(entity: &Collectible) -> CollectibleChangeset {
        CollectibleChangeset {
            name: entity.attributes.name.clone(),
            estimated_value: entity.attributes.estimated_value.clone(),
            estimated_value_range: entity
                .attributes
                .estimated_value_range
                .as_ref()
                .and_then(encode_blob),
            date_from: entity.attributes.date_from.clone(),
            production_status: entity
                .attributes
                .production_status
                .as_ref()
                .and_then(encode_blob),
            ref_number: entity.attributes.ref_number.clone(),
            selected_type: entity.attributes.selected_type.clone(),
            main_image: entity.attributes.images.main.as_ref().and_then(encode_blob),
            search_image: entity
                .attributes
                .images
                .search
                .as_ref()
                .and_then(encode_blob),
            search_no_bg_image: entity
                .attributes
                .images
                .search_no_bg
                .as_ref()
                .and_then(encode_blob),
            gallery: encode_gallery(&entity.attributes.images.gallery),
            related_subjects: entity
                .attributes
                .related_subjects
                .as_ref()
                .and_then(encode_blob),
            custom_attributes: entity.custom_attributes.as_ref().and_then(encode_blob),
            in_collection: entity.in_collection,
            updated_at: Utc::now(),
        }
    }
}

/// An empty gallery is stored as an absent column, not an empty JSON array.
fn encode_gallery(gallery: &[ImageData]) -> Option<String> {
    if gallery.is_empty() {
        None
    } else {
        encode_blob(&gallery)
    }
}

#[async_trait]
impl CollectibleRepository for CollectibleRepositoryImpl {
    async fn load_all(&self) -> AppResult<Vec<Collectible>> {
        let db = Arc::clone(&self.db);

        let records = task::spawn_blocking(move || -> AppResult<Vec<CollectibleRecord>> {
            let mut conn = db.get_connection()?;
            let rows = collectibles::table
                .order(collectibles::created_at.asc())
                .load::<CollectibleRecord>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        log_debug!("Loaded {} collectible records", records.len());
        Ok(records.into_iter().map(Self::model_to_entity).collect())
    }

    async fn save(&self, item: &Collectible) -> AppResult<Collectible> {
        Validator::validate_item_id(&item.id)?;
        Validator::validate_item_name(&item.attributes.name)?;

        let db = Arc::clone(&self.db);
        let new_record = Self::entity_to_new_model(item);
        let changes = Self::entity_to_changeset(item);
        let id = item.id.clone();

        let saved = task::spawn_blocking(move || -> AppResult<CollectibleRecord> {
            let mut conn = db.get_connection()?;

            diesel::insert_into(collectibles::table)
                .values(&new_record)
                .on_conflict(collectibles::id)
                .do_update()
                .set(&changes)
                .execute(&mut conn)?;

            let row = collectibles::table
                .find(&id)
                .first::<CollectibleRecord>(&mut conn)?;
            Ok(row)
        })
        .await??;

        log_debug!("Saved collectible {}", saved.id);
        Ok(Self::model_to_entity(saved))
    }

    async fn update(&self, item: &Collectible) -> AppResult<bool> {
        let db = Arc::clone(&self.db);
        let changes = Self::entity_to_changeset(item);
        let id = item.id.clone();

        let updated = task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;
            let rows = diesel::update(collectibles::table.find(&id))
                .set(&changes)
                .execute(&mut conn)?;
            Ok(rows)
        })
        .await??;

        if updated == 0 {
            log_debug!("Update skipped, no record with id {}", item.id);
        }
        Ok(updated > 0)
    }

    async fn update_gallery(&self, id: &str, images: &[ImageData]) -> AppResult<bool> {
        let db = Arc::clone(&self.db);
        let encoded = encode_gallery(images);
        let id = id.to_string();

        let updated = task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;
            let rows = diesel::update(collectibles::table.find(&id))
                .set((
                    collectibles::gallery.eq(encoded),
                    collectibles::updated_at.eq(Utc::now()),
                ))
                .execute(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(updated > 0)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        let deleted = task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;
            let rows = diesel::delete(collectibles::table.find(&id)).execute(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(deleted > 0)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Collectible>> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        let record = task::spawn_blocking(move || -> AppResult<Option<CollectibleRecord>> {
            let mut conn = db.get_connection()?;
            let row = collectibles::table
                .find(&id)
                .first::<CollectibleRecord>(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        Ok(record.map(Self::model_to_entity))
    }

    async fn contains(&self, id: &str) -> AppResult<bool> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        let found = task::spawn_blocking(move || -> AppResult<Option<String>> {
            let mut conn = db.get_connection()?;
            let row = collectibles::table
                .find(&id)
                .select(collectibles::id)
                .first::<String>(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        Ok(found.is_some())
    }

    async fn clear(&self) -> AppResult<usize> {
        let db = Arc::clone(&self.db);

        let removed = task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;
            let rows = diesel::delete(collectibles::table).execute(&mut conn)?;
            Ok(rows)
        })
        .await??;

        log_debug!("Cleared collection, {} records removed", removed);
        Ok(removed)
    }
}
