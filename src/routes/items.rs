use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{ApiItem, ErrorResponse, HealthResponse};
use crate::services::SimilaritySearch;

/// Number of items requested from the similarity search per query
pub const RESULT_LIMIT: i64 = 15;

const ALLOWED_ORIGIN: &str = "http://localhost:3000";
const ALLOWED_METHODS: &str = "GET, OPTIONS";
const ALLOWED_HEADERS: &str =
    "Origin, X-Requested-With, Content-Type, Accept, Authorization";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<dyn SimilaritySearch>,
}

/// Configure all item-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/items/search", web::get().to(search_items));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Item search endpoint
///
/// GET /api/v1/items/search?name={name}
///
/// Returns the catalog items closest to the given name, best match first.
/// A missing `name` parameter is treated as an empty query.
async fn search_items(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let name = query.get("name").map(String::as_str).unwrap_or("");

    match state.search.find_similar(name, RESULT_LIMIT).await {
        Ok(items) => {
            let items: Vec<ApiItem> = items.into_iter().map(ApiItem::from).collect();
            json_with_cors(StatusCode::OK, &items)
        }
        Err(e) => {
            tracing::error!("similarity search failed for {:?}: {}", name, e);
            json_with_cors(StatusCode::INTERNAL_SERVER_ERROR, &ErrorResponse::internal())
        }
    }
}

/// Build a JSON response carrying the fixed cross-origin header set
///
/// Success and failure responses carry the same headers; only status and
/// body differ.
fn json_with_cors<T: Serialize>(status: StatusCode, body: &T) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOWED_ORIGIN))
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS))
        .json(body)
}
