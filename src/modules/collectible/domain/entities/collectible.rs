//! The root entity of the catalogue: one physical collectible item.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::modules::collectible::domain::value_objects::{
    CollectibleCustomAttributes, CollectibleImages, ImageData, RelatedSubject, Sale, SubjectKind,
};

/// Placeholder shown wherever a derived display value has no source data.
pub const VALUE_PLACEHOLDER: &str = "-";

/// Catalog metadata sourced from the remote classification service. Replaced
/// wholesale by a re-fetch; only the gallery is merged in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CollectibleAttributes {
    #[serde(default)]
    pub images: CollectibleImages,
    pub name: String,
    pub estimated_value: Option<String>,
    /// 0-2 meaningful entries; interior nulls are legal and round-trip
    /// through serialization (an explicit null is distinct from an absent
    /// array).
    pub estimated_value_range: Option<Vec<Option<String>>>,
    pub related_subjects: Option<Vec<RelatedSubject>>,
    pub date_from: Option<String>,
    pub production_status: Option<Vec<String>>,
    pub ref_number: Option<String>,
    pub selected_type: Option<String>,
}

/// One catalogued item. `id` is assigned by the remote classification
/// service, globally unique, and never regenerated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub id: String,
    pub attributes: CollectibleAttributes,
    /// User-owned data; `None` until the first explicit mutation creates it.
    pub custom_attributes: Option<CollectibleCustomAttributes>,
    /// Whether this instance belongs to the permanent collection, as opposed
    /// to a transient search-result candidate.
    #[serde(rename = "inCollection", default)]
    pub in_collection: bool,
}

impl Collectible {
    pub fn new(id: impl Into<String>, attributes: CollectibleAttributes) -> Self {
        Self {
            id: id.into(),
            attributes,
            custom_attributes: None,
            in_collection: false,
        }
    }
}

fn parse_money(raw: &str) -> Option<f64> {
    raw.trim().trim_start_matches('$').trim().parse::<f64>().ok()
}

fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

// -----------------------------------------------------------------------------
// Pure derivations. These must never panic: malformed or missing source data
// degrades to `None` or the placeholder.
// -----------------------------------------------------------------------------

impl Collectible {
    /// Single numeric point estimate. Prefers the mean of all parseable
    /// range entries; falls back to the `$`-stripped point estimate.
    pub fn estimated_value_float(&self) -> Option<f64> {
        let parsed: Vec<f64> = self
            .range_entries()
            .filter_map(|s| parse_money(s))
            .collect();
        if !parsed.is_empty() {
            return Some(parsed.iter().sum::<f64>() / parsed.len() as f64);
        }
        self.attributes
            .estimated_value
            .as_deref()
            .and_then(parse_money)
    }

    /// Human-readable estimate: `"$A - $B"` for a two-entry range, `"$A"`
    /// for one entry (fractional parts truncated, not rounded), otherwise
    /// the point estimate with a guaranteed leading `$`. `None` only when
    /// neither source exists.
    pub fn estimated_value_display(&self) -> Option<String> {
        let whole: Vec<String> = self
            .range_entries()
            .map(|s| {
                let s = s.trim().trim_start_matches('$');
                s.split('.').next().unwrap_or(s).to_string()
            })
            .collect();

        match whole.as_slice() {
            [low, high] => return Some(format!("${} - ${}", low, high)),
            [single] => return Some(format!("${}", single)),
            _ => {}
        }

        self.attributes.estimated_value.as_deref().map(|v| {
            let v = v.trim();
            if v.starts_with('$') {
                v.to_string()
            } else {
                format!("${}", v)
            }
        })
    }

    /// Estimated value minus the price paid. Only meaningful once a positive
    /// purchase price exists; `None` otherwise.
    pub fn return_value(&self) -> Option<f64> {
        let base = self
            .attributes
            .estimated_value
            .as_deref()
            .and_then(parse_money)
            .or_else(|| self.range_entries().find_map(|s| parse_money(s)))?;

        let paid = self.custom_attributes.as_ref()?.price_paid?;
        if paid > 0.0 {
            Some(base - paid)
        } else {
            None
        }
    }

    pub fn return_value_display(&self) -> String {
        self.return_value()
            .map(format_currency)
            .unwrap_or_else(|| VALUE_PLACEHOLDER.to_string())
    }

    /// Zero counts as unset: the persistence layer cannot distinguish a true
    /// zero from an absent numeric field.
    pub fn price_paid_display(&self) -> String {
        match self.custom_attributes.as_ref().and_then(|c| c.price_paid) {
            Some(paid) if paid > 0.0 => format_currency(paid),
            _ => VALUE_PLACEHOLDER.to_string(),
        }
    }

    /// The AI-classified series/category label, or empty.
    pub fn subject(&self) -> &str {
        self.related_subject_name(SubjectKind::AiClassified)
            .unwrap_or("")
    }

    /// The label to show and search for: user override first, then the AI
    /// classification when non-empty.
    pub fn query_subject(&self) -> Option<&str> {
        self.related_subject_name(SubjectKind::UserSelectionPrimary)
            .or_else(|| Some(self.subject()).filter(|s| !s.is_empty()))
    }

    fn related_subject_name(&self, kind: SubjectKind) -> Option<&str> {
        self.attributes
            .related_subjects
            .as_deref()?
            .iter()
            .find(|s| s.kind == Some(kind))
            .and_then(|s| s.name.as_deref())
    }

    fn range_entries(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .estimated_value_range
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .filter_map(|entry| entry.as_deref())
    }
}

// -----------------------------------------------------------------------------
// Sale accessors. All read through `custom_attributes.sales`.
// -----------------------------------------------------------------------------

impl Collectible {
    pub fn sold_price(&self) -> Option<f64> {
        self.sales()?.sold_price
    }

    pub fn sold_date(&self) -> Option<&str> {
        self.sales()?.sold_date.as_deref()
    }

    pub fn sold_platform(&self) -> Option<&str> {
        self.sales()?.sold_platform.as_deref()
    }

    /// The explicit "mark as sold" flag. Related to, but independent of,
    /// `sold_price` presence.
    pub fn sold(&self) -> bool {
        self.sales().map(|s| s.sold).unwrap_or(false)
    }

    /// Defined as "a sold price exists", matching display behavior.
    pub fn is_sold(&self) -> bool {
        self.sold_price().is_some()
    }

    fn sales(&self) -> Option<&Sale> {
        self.custom_attributes.as_ref()?.sales.as_ref()
    }
}

// -----------------------------------------------------------------------------
// Explicit mutation. State creation is visible at call sites: everything that
// needs custom attributes goes through `custom_attributes_mut`.
// -----------------------------------------------------------------------------

impl Collectible {
    /// Access the user-owned attribute group, creating it on first use. Once
    /// created it is never removed short of deleting the whole item.
    pub fn custom_attributes_mut(&mut self) -> &mut CollectibleCustomAttributes {
        self.custom_attributes
            .get_or_insert_with(CollectibleCustomAttributes::default)
    }

    fn sales_mut(&mut self) -> &mut Sale {
        self.custom_attributes_mut()
            .sales
            .get_or_insert_with(Sale::default)
    }

    pub fn set_price_paid(&mut self, price: f64) {
        self.custom_attributes_mut().price_paid = Some(price);
    }

    pub fn set_purchase_date(&mut self, date: impl Into<String>) {
        self.custom_attributes_mut().purchase_date = Some(date.into());
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.custom_attributes_mut().search_query = Some(query.into());
    }

    pub fn add_user_photo(&mut self, photo: ImageData) {
        self.custom_attributes_mut()
            .user_photos
            .get_or_insert_with(Vec::new)
            .push(photo);
    }

    /// Removes every user photo with the given url; `true` when anything was
    /// removed.
    pub fn remove_user_photo(&mut self, url: &str) -> bool {
        let Some(photos) = self
            .custom_attributes
            .as_mut()
            .and_then(|c| c.user_photos.as_mut())
        else {
            return false;
        };
        let before = photos.len();
        photos.retain(|p| p.url.as_deref() != Some(url));
        photos.len() < before
    }

    /// The normal sale flow: sets the price, details and the `sold` flag
    /// together.
    pub fn record_sale(&mut self, price: f64, date: Option<String>, platform: Option<String>) {
        let sale = self.sales_mut();
        sale.sold_price = Some(price);
        sale.sold_date = date;
        sale.sold_platform = platform;
        sale.sold = true;
    }

    /// Sets the flag without touching the price; the two signals are kept
    /// independently settable on purpose.
    pub fn mark_sold(&mut self) {
        self.sales_mut().sold = true;
    }

    /// "Unsell": drops the whole sale record.
    pub fn clear_sale(&mut self) {
        if let Some(custom) = self.custom_attributes.as_mut() {
            custom.sales = None;
        }
    }

    /// Replaces any existing user subject selection with a new one, keeping
    /// the AI classification alongside.
    pub fn select_subject(&mut self, name: impl Into<String>, url: Option<String>) {
        let subjects = self.attributes.related_subjects.get_or_insert_with(Vec::new);
        subjects.retain(|s| s.kind != Some(SubjectKind::UserSelectionPrimary));
        subjects.push(RelatedSubject::user_selection(name, url));
    }

    /// Replaces the gallery after a lazy fetch; every other field is left
    /// untouched.
    pub fn merge_gallery(&mut self, images: Vec<ImageData>) {
        self.attributes.images.gallery = images;
    }
}

// -----------------------------------------------------------------------------
// Outbound serialization for the manage-collection endpoint.
// -----------------------------------------------------------------------------

impl Collectible {
    /// Nested map mirroring the wire format with null and empty branches
    /// recursively pruned, so partial updates only transmit populated
    /// fields. An item that never had custom attributes produces no
    /// `custom_attributes` key at all.
    pub fn to_payload(&self) -> Value {
        let value = serde_json::to_value(self).unwrap_or(Value::Null);
        prune_empty(value).unwrap_or_else(|| Value::Object(Map::new()))
    }
}

/// Drops nulls and collapses empty arrays/objects to absence, recursively.
fn prune_empty(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Array(items) => {
            let pruned: Vec<Value> = items.into_iter().filter_map(prune_empty).collect();
            if pruned.is_empty() {
                None
            } else {
                Some(Value::Array(pruned))
            }
        }
        Value::Object(entries) => {
            let pruned: Map<String, Value> = entries
                .into_iter()
                .filter_map(|(key, val)| prune_empty(val).map(|val| (key, val)))
                .collect();
            if pruned.is_empty() {
                None
            } else {
                Some(Value::Object(pruned))
            }
        }
        other => Some(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item_with_range(estimated_value: Option<&str>, range: Option<Vec<Option<&str>>>) -> Collectible {
        Collectible::new(
            "A",
            CollectibleAttributes {
                name: "Kitsune Mask Figure".to_string(),
                estimated_value: estimated_value.map(str::to_string),
                estimated_value_range: range
                    .map(|r| r.into_iter().map(|e| e.map(str::to_string)).collect()),
                ..CollectibleAttributes::default()
            },
        )
    }

    #[test]
    fn float_prefers_mean_of_range() {
        let item = item_with_range(None, Some(vec![Some("10"), Some("20")]));
        assert_eq!(item.estimated_value_float(), Some(15.0));
    }

    #[test]
    fn float_skips_null_and_garbage_entries() {
        let item = item_with_range(None, Some(vec![None, Some("150")]));
        assert_eq!(item.estimated_value_float(), Some(150.0));

        let item = item_with_range(None, Some(vec![Some("n/a"), Some("150")]));
        assert_eq!(item.estimated_value_float(), Some(150.0));
    }

    #[test]
    fn float_falls_back_to_dollar_stripped_point_estimate() {
        let item = item_with_range(Some("$42.50"), None);
        assert_eq!(item.estimated_value_float(), Some(42.5));

        let item = item_with_range(Some("not a price"), None);
        assert_eq!(item.estimated_value_float(), None);
    }

    #[test]
    fn display_truncates_fractions_without_rounding() {
        let item = item_with_range(None, Some(vec![Some("100.50"), Some("200.75")]));
        assert_eq!(item.estimated_value_display().as_deref(), Some("$100 - $200"));
    }

    #[test]
    fn display_single_entry_range() {
        let item = item_with_range(None, Some(vec![None, Some("150")]));
        assert_eq!(item.estimated_value_display().as_deref(), Some("$150"));
    }

    #[test]
    fn display_falls_through_on_other_range_counts() {
        let item = item_with_range(Some("99"), Some(vec![None, None]));
        assert_eq!(item.estimated_value_display().as_deref(), Some("$99"));

        let item = item_with_range(Some("$99"), Some(vec![Some("1"), Some("2"), Some("3")]));
        assert_eq!(item.estimated_value_display().as_deref(), Some("$99"));
    }

    #[test]
    fn display_none_only_when_both_sources_missing() {
        let item = item_with_range(None, None);
        assert_eq!(item.estimated_value_display(), None);

        let item = item_with_range(None, Some(vec![None]));
        assert_eq!(item.estimated_value_display(), None);
    }

    #[test]
    fn scenario_range_ten_twenty() {
        let item = item_with_range(None, Some(vec![Some("10"), Some("20")]));
        assert_eq!(item.estimated_value_float(), Some(15.0));
        assert_eq!(item.estimated_value_display().as_deref(), Some("$10 - $20"));
    }

    #[test]
    fn return_value_requires_positive_price_paid() {
        let mut item = item_with_range(Some("100"), None);
        assert_eq!(item.return_value(), None);

        item.set_price_paid(0.0);
        assert_eq!(item.return_value(), None);

        item.set_price_paid(40.0);
        assert_eq!(item.return_value(), Some(60.0));
        assert_eq!(item.return_value_display(), "$60.00");
    }

    #[test]
    fn return_value_base_falls_back_to_first_parseable_range_entry() {
        let mut item = item_with_range(None, Some(vec![None, Some("80")]));
        item.set_price_paid(30.0);
        assert_eq!(item.return_value(), Some(50.0));
    }

    #[test]
    fn return_value_none_without_any_base() {
        let mut item = item_with_range(None, None);
        item.set_price_paid(30.0);
        assert_eq!(item.return_value(), None);
        assert_eq!(item.return_value_display(), VALUE_PLACEHOLDER);
    }

    #[test]
    fn price_paid_display_treats_zero_as_unset() {
        let mut item = item_with_range(None, None);
        assert_eq!(item.price_paid_display(), VALUE_PLACEHOLDER);

        item.set_price_paid(50.0);
        assert_eq!(item.price_paid_display(), "$50.00");

        item.set_price_paid(0.0);
        assert_eq!(item.price_paid_display(), VALUE_PLACEHOLDER);
    }

    #[test]
    fn subject_resolution_prefers_user_selection() {
        let mut item = item_with_range(None, None);
        assert_eq!(item.subject(), "");
        assert_eq!(item.query_subject(), None);

        item.attributes.related_subjects = Some(vec![RelatedSubject::classified("Fox Spirits")]);
        assert_eq!(item.subject(), "Fox Spirits");
        assert_eq!(item.query_subject(), Some("Fox Spirits"));

        item.select_subject("Yokai Series", None);
        assert_eq!(item.subject(), "Fox Spirits");
        assert_eq!(item.query_subject(), Some("Yokai Series"));
    }

    #[test]
    fn select_subject_replaces_previous_selection() {
        let mut item = item_with_range(None, None);
        item.select_subject("First", None);
        item.select_subject("Second", None);

        let subjects = item.attributes.related_subjects.as_ref().unwrap();
        let selections: Vec<_> = subjects
            .iter()
            .filter(|s| s.kind == Some(SubjectKind::UserSelectionPrimary))
            .collect();
        assert_eq!(selections.len(), 1);
        assert_eq!(selections[0].name.as_deref(), Some("Second"));
    }

    #[test]
    fn sale_flow_and_divergent_flags() {
        let mut item = item_with_range(None, None);
        assert!(!item.sold());
        assert!(!item.is_sold());

        item.record_sale(120.0, Some("2026-08-01".into()), Some("ebay".into()));
        assert!(item.sold());
        assert!(item.is_sold());
        assert_eq!(item.sold_price(), Some(120.0));
        assert_eq!(item.sold_platform(), Some("ebay"));

        item.clear_sale();
        assert!(!item.sold());
        assert_eq!(item.sold_price(), None);
        // custom attributes survive the unsell
        assert!(item.custom_attributes.is_some());

        // the flag alone does not make the item "sold" for display purposes
        item.mark_sold();
        assert!(item.sold());
        assert!(!item.is_sold());
    }

    #[test]
    fn custom_attributes_created_only_by_explicit_mutation() {
        let mut item = item_with_range(Some("10"), None);
        assert!(item.custom_attributes.is_none());

        // read-only derivations never create the group
        let _ = item.price_paid_display();
        let _ = item.return_value();
        let _ = item.is_sold();
        assert!(item.custom_attributes.is_none());

        item.set_search_query("kitsune figure");
        assert!(item.custom_attributes.is_some());
    }

    #[test]
    fn user_photo_add_and_remove() {
        let mut item = item_with_range(None, None);
        item.add_user_photo(ImageData::from_url("file:///a.jpg"));
        item.add_user_photo(ImageData::from_url("file:///b.jpg"));

        assert!(item.remove_user_photo("file:///a.jpg"));
        assert!(!item.remove_user_photo("file:///a.jpg"));

        let photos = item
            .custom_attributes
            .as_ref()
            .and_then(|c| c.user_photos.as_ref())
            .unwrap();
        assert_eq!(photos.len(), 1);
    }

    #[test]
    fn payload_omits_custom_attributes_when_never_set() {
        let item = item_with_range(Some("25"), None);
        let payload = item.to_payload();
        assert!(payload.get("custom_attributes").is_none());
        assert_eq!(payload["id"], json!("A"));
        assert_eq!(payload["attributes"]["estimated_value"], json!("25"));
    }

    #[test]
    fn payload_with_only_price_paid_has_no_sales_key() {
        let mut item = item_with_range(None, None);
        item.set_price_paid(50.0);

        let payload = item.to_payload();
        assert_eq!(payload["custom_attributes"]["price_paid"], json!(50.0));
        assert!(payload["custom_attributes"].get("sales").is_none());
    }

    #[test]
    fn payload_collapses_empty_branches() {
        let item = item_with_range(None, None);
        let payload = item.to_payload();
        // no image slot populated, so the whole images branch is absent
        assert!(payload["attributes"].get("images").is_none());
        assert_eq!(payload["inCollection"], json!(false));
    }

    #[test]
    fn serialization_round_trips_interior_nulls() {
        let item = item_with_range(None, Some(vec![None, Some("150")]));
        let encoded = serde_json::to_string(&item).unwrap();
        assert!(encoded.contains("[null,\"150\"]"));

        let decoded: Collectible = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, item);
        assert!(decoded.custom_attributes.is_none());
    }
}
