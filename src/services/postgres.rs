use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::models::CatalogItem;
use crate::services::search::{SearchError, SimilaritySearch};

/// PostgreSQL-backed item catalog
///
/// Ranks items by trigram similarity between their display name and the
/// query text (pg_trgm). The pool is established once at startup and
/// shared read-only across all in-flight requests.
pub struct PostgresCatalog {
    pool: PgPool,
}

impl PostgresCatalog {
    /// Create a new catalog client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, SearchError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new catalog client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, SearchError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, SearchError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

#[async_trait]
impl SimilaritySearch for PostgresCatalog {
    /// Fetch the catalog items most similar to `query`
    ///
    /// Ordering is descending trigram similarity, with the item id as a
    /// stable tiebreak. Names below the pg_trgm similarity threshold do
    /// not match, so an unrecognized query yields an empty result rather
    /// than an error.
    async fn find_similar(
        &self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<CatalogItem>, SearchError> {
        let sql = r#"
            SELECT id, name, media_url, rarity
            FROM items
            WHERE name % $1
            ORDER BY similarity(name, $1) DESC, id
            LIMIT $2
        "#;

        let items = sqlx::query_as::<_, CatalogItem>(sql)
            .bind(query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("query {:?} matched {} items", query, items.len());

        Ok(items)
    }
}
