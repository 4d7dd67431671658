// Model exports
pub mod domain;
pub mod responses;

pub use domain::CatalogItem;
pub use responses::{ApiItem, ErrorResponse, HealthResponse};
