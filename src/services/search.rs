use async_trait::async_trait;
use thiserror::Error;

use crate::models::CatalogItem;

/// Errors that can occur while searching the catalog
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("search backend unavailable: {0}")]
    Unavailable(String),
}

/// Capability for ranking catalog items by textual closeness to a query
///
/// Implementations return at most `limit` items, ordered by descending
/// relevance. Handlers depend on this trait only, so a backend can be
/// swapped for a test double without touching process bootstrap.
#[async_trait]
pub trait SimilaritySearch: Send + Sync {
    async fn find_similar(
        &self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<CatalogItem>, SearchError>;
}
