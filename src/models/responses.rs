use serde::{Deserialize, Serialize};

use crate::models::domain::CatalogItem;

/// Wire shape of one item in a search response
///
/// Derived 1:1 from a `CatalogItem`; built fresh per response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiItem {
    pub id: i32,
    pub name: String,
    #[serde(rename = "mediaUrl")]
    pub media_url: String,
    pub rarity: String,
}

impl From<CatalogItem> for ApiItem {
    fn from(item: CatalogItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            media_url: item.media_url,
            rarity: item.rarity,
        }
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Generic message returned for any backend failure. Backend error
    /// detail stays in the server logs, never in the body.
    pub fn internal() -> Self {
        Self {
            error: "An internal error occurred".to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
