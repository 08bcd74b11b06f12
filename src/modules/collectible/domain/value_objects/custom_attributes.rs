//! User-owned data layered on top of catalog metadata.

use serde::{Deserialize, Serialize};

use super::ImageData;

/// Record of a completed disposal of an item.
///
/// `sold` and `sold_price` are observably related but independently settable
/// signals: the normal flow sets both, but neither implies the other at the
/// type level. Downstream code keys "is sold" off `sold_price` presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Sale {
    pub sold_price: Option<f64>,
    pub sold_date: Option<String>,
    pub sold_platform: Option<String>,
    #[serde(default)]
    pub sold: bool,
}

/// User-entered attributes. Absent until the user first records a price,
/// photo, sale or search query; absence is distinct from a zero-valued
/// struct ("never paid anything" vs "paid $0").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CollectibleCustomAttributes {
    pub price_paid: Option<f64>,
    pub purchase_date: Option<String>,
    pub user_photos: Option<Vec<ImageData>>,
    pub search_query: Option<String>,
    pub sales: Option<Sale>,
}
