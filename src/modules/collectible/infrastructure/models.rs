use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::log_warn;
use crate::schema::collectibles;

/// Main collectible database model. Scalar attribute fields are flat
/// columns; list-typed and nested-struct fields are stored as self-contained
/// JSON text blobs so the schema stays one row per item.
#[derive(Queryable, Debug, Clone)]
#[diesel(table_name = collectibles)]
pub struct CollectibleRecord {
    pub id: String,
    pub name: String,
    pub estimated_value: Option<String>,
    pub estimated_value_range: Option<String>,
    pub date_from: Option<String>,
    pub production_status: Option<String>,
    pub ref_number: Option<String>,
    pub selected_type: Option<String>,
    pub main_image: Option<String>,
    pub search_image: Option<String>,
    pub search_no_bg_image: Option<String>,
    pub gallery: Option<String>,
    pub related_subjects: Option<String>,
    pub custom_attributes: Option<String>,
    pub in_collection: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = collectibles)]
pub struct NewCollectible {
    pub id: String,
    pub name: String,
    pub estimated_value: Option<String>,
    pub estimated_value_range: Option<String>,
    pub date_from: Option<String>,
    pub production_status: Option<String>,
    pub ref_number: Option<String>,
    pub selected_type: Option<String>,
    pub main_image: Option<String>,
    pub search_image: Option<String>,
    pub search_no_bg_image: Option<String>,
    pub gallery: Option<String>,
    pub related_subjects: Option<String>,
    pub custom_attributes: Option<String>,
    pub in_collection: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full-field changeset. `treat_none_as_null` so an update clears columns the
/// incoming entity no longer populates instead of skipping them.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = collectibles)]
#[diesel(treat_none_as_null = true)]
pub struct CollectibleChangeset {
    pub name: String,
    pub estimated_value: Option<String>,
    pub estimated_value_range: Option<String>,
    pub date_from: Option<String>,
    pub production_status: Option<String>,
    pub ref_number: Option<String>,
    pub selected_type: Option<String>,
    pub main_image: Option<String>,
    pub search_image: Option<String>,
    pub search_no_bg_image: Option<String>,
    pub gallery: Option<String>,
    pub related_subjects: Option<String>,
    pub custom_attributes: Option<String>,
    pub in_collection: bool,
    pub updated_at: DateTime<Utc>,
}

/// Encode a nested field as its JSON blob form.
pub(crate) fn encode_blob<T: Serialize>(value: &T) -> Option<String> {
    serde_json::to_string(value).ok()
}

/// Decode a stored JSON blob, degrading to absent on failure. A broken blob
/// loses that one field, never the whole record.
pub(crate) fn decode_blob<T: DeserializeOwned>(column: &str, raw: Option<String>) -> Option<T> {
    let raw = raw?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log_warn!("Dropping undecodable '{}' blob: {}", column, e);
            None
        }
    }
}
