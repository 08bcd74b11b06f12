//! Reference imagery attached to a collectible.

use serde::{Deserialize, Serialize};

/// One catalog image: a remote url plus content flags, and an optional path
/// to a locally cached copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ImageData {
    pub url: Option<String>,
    #[serde(default)]
    pub nudity: bool,
    #[serde(default)]
    pub insensitive: bool,
    pub path: Option<String>,
}

impl ImageData {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }
}

/// The image slots of a collectible. `main`, `search` and `search_no_bg` are
/// singular; `gallery` is ordered by presentation and fetched lazily,
/// independently of the rest of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CollectibleImages {
    pub main: Option<ImageData>,
    pub search: Option<ImageData>,
    pub search_no_bg: Option<ImageData>,
    #[serde(default)]
    pub gallery: Vec<ImageData>,
}
