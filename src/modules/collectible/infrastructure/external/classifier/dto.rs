//! Response envelopes for the remote classification service.
//!
//! Items on the wire use the same snake_case shape the domain entity
//! serializes to (`inCollection` being the one camelCase holdout), so list
//! envelopes carry raw JSON values and the mapper decodes each element
//! individually, best-effort.

use serde::{Deserialize, Serialize};

/// Shape of "related items" / barcode lookup responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectibleListResponse {
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
}
