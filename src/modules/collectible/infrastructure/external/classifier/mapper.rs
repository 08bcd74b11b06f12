use crate::log_warn;
use crate::modules::collectible::domain::entities::Collectible;
use crate::shared::errors::{AppError, AppResult};

use super::dto::CollectibleListResponse;

/// Decode a single classification / lookup response body.
pub fn collectible_from_json(raw: &str) -> AppResult<Collectible> {
    serde_json::from_str(raw).map_err(AppError::from)
}

/// Decode a list response. Malformed elements are skipped rather than
/// failing the whole response; the remaining items decode normally.
pub fn collectibles_from_json(raw: &str) -> AppResult<Vec<Collectible>> {
    let response: CollectibleListResponse = serde_json::from_str(raw)?;

    Ok(response
        .items
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<Collectible>(value) {
            Ok(item) => Some(item),
            Err(e) => {
                log_warn!("Skipping undecodable item in list response: {}", e);
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE: &str = r#"{
        "id": "cls-001",
        "attributes": {
            "images": {
                "main": { "url": "https://img.example/main.jpg", "nudity": false, "insensitive": false },
                "gallery": []
            },
            "name": "Tanuki Statue",
            "estimated_value": "$120",
            "estimated_value_range": [null, "150"],
            "related_subjects": [
                { "name": "Forest Spirits", "type": "ai_classified" }
            ],
            "production_status": ["retired"],
            "ref_number": "TS-9"
        },
        "inCollection": false
    }"#;

    #[test]
    fn decodes_single_item_with_wire_field_names() {
        let item = collectible_from_json(SINGLE).unwrap();
        assert_eq!(item.id, "cls-001");
        assert_eq!(item.attributes.name, "Tanuki Statue");
        assert_eq!(item.subject(), "Forest Spirits");
        assert!(!item.in_collection);
        assert!(item.custom_attributes.is_none());
        // interior null survives the decode
        assert_eq!(
            item.attributes.estimated_value_range,
            Some(vec![None, Some("150".to_string())])
        );
    }

    #[test]
    fn list_decode_skips_malformed_elements() {
        let raw = format!(
            r#"{{ "items": [ {}, {{ "attributes": "garbage" }}, {} ] }}"#,
            SINGLE, SINGLE
        );
        let items = collectibles_from_json(&raw).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn empty_and_missing_items_key_both_decode() {
        assert!(collectibles_from_json(r#"{ "items": [] }"#).unwrap().is_empty());
        assert!(collectibles_from_json("{}").unwrap().is_empty());
    }
}
