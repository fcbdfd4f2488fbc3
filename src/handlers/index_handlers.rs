use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{instrument, debug};

use crate::db::DbPool;
use crate::dto::StatsDto;
use crate::errors::ApiError;
use crate::repo;

/// Handler for `GET /status`
pub async fn status_handler() -> Json<Value> {
    Json(json!({"status": "OK"}))
}

/// Handler for `GET /stats`
///
/// Returns the number of stored objects of each kind.
#[instrument(skip(pool))]
pub async fn stats_handler(State(pool): State<Arc<DbPool>>) -> Result<Json<StatsDto>, ApiError> {
    debug!("Counting objects");

    let stats = StatsDto {
        cities: repo::count_cities(&pool).map_err(ApiError::Database)?,
        places: repo::count_places(&pool).map_err(ApiError::Database)?,
        reviews: repo::count_reviews(&pool).map_err(ApiError::Database)?,
        users: repo::count_users(&pool).map_err(ApiError::Database)?,
    };

    Ok(Json(stats))
}

/// Fallback for routes that do not exist
pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}

/// Fallback for known routes called with the wrong method
pub async fn method_not_allowed_handler() -> ApiError {
    ApiError::MethodNotAllowed
}
