use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{instrument, debug, info};

use crate::db::DbPool;
use crate::dto::{parse_nonempty_body, NewReviewDto, ReviewPatch};
use crate::errors::ApiError;
use crate::models::Review;
use crate::repo;

/// Handler for listing the reviews of a place
///
/// This function handles GET requests to `/places/{place_id}/reviews`.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `place_id` - The ID of the place, extracted from the URL path
///
/// ### Returns
///
/// Every review of the place, or 404 if the place does not exist
#[instrument(skip(pool), fields(place_id = %place_id))]
pub async fn list_reviews_by_place_handler(
    State(pool): State<Arc<DbPool>>,
    Path(place_id): Path<String>,
) -> Result<Json<Vec<Review>>, ApiError> {
    debug!("Listing reviews for place");

    let place = repo::get_place(&pool, &place_id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    let reviews = repo::list_reviews_for_place(&pool, &place)
        .map_err(ApiError::Database)?;

    info!("Retrieved {} reviews for place {}", reviews.len(), place_id);
    Ok(Json(reviews))
}

/// Handler for retrieving a specific review
///
/// This function handles GET requests to `/reviews/{review_id}`.
#[instrument(skip(pool), fields(review_id = %review_id))]
pub async fn get_review_handler(
    State(pool): State<Arc<DbPool>>,
    Path(review_id): Path<String>,
) -> Result<Json<Review>, ApiError> {
    debug!("Retrieving review");

    let review = repo::get_review(&pool, &review_id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(review))
}

/// Handler for deleting a specific review
///
/// This function handles DELETE requests to `/reviews/{review_id}`.
#[instrument(skip(pool), fields(review_id = %review_id))]
pub async fn delete_review_handler(
    State(pool): State<Arc<DbPool>>,
    Path(review_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    info!("Deleting review with id: {}", review_id);

    let review = repo::get_review(&pool, &review_id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    repo::delete_review(&pool, &review.get_id()).await
        .map_err(ApiError::Database)?;

    info!("Successfully deleted review with id: {}", review_id);
    Ok(Json(json!({})))
}

/// Handler for creating a review for a place
///
/// This function handles POST requests to `/places/{place_id}/reviews`.
/// The place must exist, the body must be a non-empty JSON object with
/// `user_id` and `text`, and the user must exist, checked in that order.
///
/// ### Returns
///
/// The newly created review with status 201
#[instrument(skip(pool, body), fields(place_id = %place_id))]
pub async fn create_review_handler(
    State(pool): State<Arc<DbPool>>,
    Path(place_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    info!("Creating new review");

    let place = repo::get_place(&pool, &place_id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    let object = parse_nonempty_body(body)?;
    let new_review = NewReviewDto::from_object(object)?;

    repo::get_user(&pool, &new_review.user_id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    let review = repo::create_review(&pool, &place.get_id(), &new_review.user_id, new_review.text).await
        .map_err(ApiError::Database)?;

    info!("Successfully created review with id: {}", review.get_id());
    Ok((StatusCode::CREATED, Json(review)))
}

/// Handler for updating a review
///
/// This function handles PUT requests to `/reviews/{review_id}`. Only the
/// text can change; the author, the place, and the timestamps are skipped.
/// An empty object is rejected as "Not a JSON".
#[instrument(skip(pool, body), fields(review_id = %review_id))]
pub async fn update_review_handler(
    State(pool): State<Arc<DbPool>>,
    Path(review_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Review>, ApiError> {
    info!("Updating review");

    let review = repo::get_review(&pool, &review_id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    let object = parse_nonempty_body(body)?;
    let patch = ReviewPatch::from_object(object)?;

    if !patch.ignored.is_empty() {
        debug!("Ignoring protected fields: {:?}", patch.ignored);
    }

    let updated = repo::update_review(&pool, &review.get_id(), patch.changes).await
        .map_err(ApiError::Database)?;

    info!("Successfully updated review with id: {}", updated.get_id());
    Ok(Json(updated))
}
