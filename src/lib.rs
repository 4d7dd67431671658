//! Auction item search - item name similarity search service for the auctions API
//!
//! Exposes a single search endpoint that ranks catalog items by textual
//! closeness to a free-text name and returns the best matches as JSON,
//! shaped for the browser storefront.

pub mod config;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use models::{ApiItem, CatalogItem, ErrorResponse};
pub use services::{PostgresCatalog, SearchError, SimilaritySearch};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let api = ApiItem::from(CatalogItem {
            id: 1,
            name: "Linen Cloth".to_string(),
            media_url: String::new(),
            rarity: "common".to_string(),
        });
        assert_eq!(api.id, 1);
    }
}
