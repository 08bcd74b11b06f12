use curio::modules::collectible::domain::value_objects::{ImageData, RelatedSubject};
use curio::{Collectible, CollectibleAttributes};

pub fn figurine(id: &str, name: &str) -> Collectible {
    Collectible::new(
        id,
        CollectibleAttributes {
            name: name.to_string(),
            ..CollectibleAttributes::default()
        },
    )
}

/// A fully populated catalog entry, the shape a classification response
/// produces.
pub fn classified_figurine(id: &str) -> Collectible {
    let mut item = Collectible::new(
        id,
        CollectibleAttributes {
            name: "Kitsune Mask Figure".to_string(),
            estimated_value: Some("$120".to_string()),
            estimated_value_range: Some(vec![None, Some("150".to_string())]),
            related_subjects: Some(vec![RelatedSubject::classified("Fox Spirits")]),
            date_from: Some("1998".to_string()),
            production_status: Some(vec!["retired".to_string()]),
            ref_number: Some("KM-42".to_string()),
            selected_type: Some("figurine".to_string()),
            ..CollectibleAttributes::default()
        },
    );
    item.attributes.images.main = Some(ImageData::from_url("https://img.example/km-42.jpg"));
    item
}

pub fn gallery_images(count: usize) -> Vec<ImageData> {
    (0..count)
        .map(|i| ImageData::from_url(format!("https://img.example/gallery/{}.jpg", i)))
        .collect()
}
