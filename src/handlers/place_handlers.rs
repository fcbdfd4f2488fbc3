use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{instrument, debug, info};

use crate::db::DbPool;
use crate::dto::{parse_body, required_str, NewPlaceDto, PlacePatch};
use crate::errors::ApiError;
use crate::models::Place;
use crate::repo;

/// Handler for listing the places of a city
///
/// This function handles GET requests to `/cities/{city_id}/places`.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `city_id` - The ID of the city, extracted from the URL path
///
/// ### Returns
///
/// Every place listed under the city, or 404 if the city does not exist
#[instrument(skip(pool), fields(city_id = %city_id))]
pub async fn list_places_by_city_handler(
    State(pool): State<Arc<DbPool>>,
    Path(city_id): Path<String>,
) -> Result<Json<Vec<Place>>, ApiError> {
    debug!("Listing places for city");

    let city = repo::get_city(&pool, &city_id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    let places = repo::list_places_for_city(&pool, &city)
        .map_err(ApiError::Database)?;

    info!("Retrieved {} places for city {}", places.len(), city_id);
    Ok(Json(places))
}

/// Handler for retrieving a specific place
///
/// This function handles GET requests to `/places/{place_id}`.
#[instrument(skip(pool), fields(place_id = %place_id))]
pub async fn get_place_handler(
    State(pool): State<Arc<DbPool>>,
    Path(place_id): Path<String>,
) -> Result<Json<Place>, ApiError> {
    debug!("Retrieving place");

    let place = repo::get_place(&pool, &place_id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(place))
}

/// Handler for deleting a specific place
///
/// This function handles DELETE requests to `/places/{place_id}`. The
/// place's reviews are removed with it.
///
/// ### Returns
///
/// An empty JSON object, or 404 if the place does not exist
#[instrument(skip(pool), fields(place_id = %place_id))]
pub async fn delete_place_handler(
    State(pool): State<Arc<DbPool>>,
    Path(place_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    info!("Deleting place with id: {}", place_id);

    // First check if the place exists
    let place = repo::get_place(&pool, &place_id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    repo::delete_place(&pool, &place.get_id()).await
        .map_err(ApiError::Database)?;

    info!("Successfully deleted place with id: {}", place_id);
    Ok(Json(json!({})))
}

/// Handler for creating a place under a city
///
/// This function handles POST requests to `/cities/{city_id}/places`.
/// Checks run in a fixed order: the city must exist, the body must be a
/// JSON object carrying `user_id`, that user must exist, and only then is
/// `name` required.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `city_id` - The ID of the parent city, extracted from the URL path
/// * `body` - The raw JSON body
///
/// ### Returns
///
/// The newly created place with status 201
#[instrument(skip(pool, body), fields(city_id = %city_id))]
pub async fn create_place_handler(
    State(pool): State<Arc<DbPool>>,
    Path(city_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Place>), ApiError> {
    info!("Creating new place");

    let city = repo::get_city(&pool, &city_id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    let object = parse_body(body)?;
    let user_id = required_str(&object, "user_id")?;

    repo::get_user(&pool, &user_id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    let new_place = NewPlaceDto::from_object(object)?;

    let place = repo::create_place(&pool, &city.get_id(), new_place).await
        .map_err(ApiError::Database)?;

    info!("Successfully created place with id: {}", place.get_id());
    Ok((StatusCode::CREATED, Json(place)))
}

/// Handler for updating a place
///
/// This function handles PUT requests to `/places/{place_id}`. Protected
/// fields in the body are skipped; moving a place to another city requires
/// that city to exist.
#[instrument(skip(pool, body), fields(place_id = %place_id))]
pub async fn update_place_handler(
    State(pool): State<Arc<DbPool>>,
    Path(place_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Place>, ApiError> {
    info!("Updating place");

    let place = repo::get_place(&pool, &place_id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    let object = parse_body(body)?;
    let patch = PlacePatch::from_object(object)?;

    if !patch.ignored.is_empty() {
        debug!("Ignoring protected fields: {:?}", patch.ignored);
    }

    if let Some(ref city_id) = patch.changes.city_id {
        repo::get_city(&pool, city_id)
            .map_err(ApiError::Database)?
            .ok_or(ApiError::NotFound)?;
    }

    let updated = repo::update_place(&pool, &place.get_id(), patch.changes).await
        .map_err(ApiError::Database)?;

    info!("Successfully updated place with id: {}", updated.get_id());
    Ok(Json(updated))
}
