// Service exports
pub mod postgres;
pub mod search;

pub use postgres::PostgresCatalog;
pub use search::{SearchError, SimilaritySearch};
