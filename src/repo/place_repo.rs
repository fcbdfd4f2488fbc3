use crate::db::{DbPool, ExecuteWithRetry};
use crate::dto::{NewPlaceDto, PlacePatch};
use crate::models::{City, Place};
use crate::schema::places;
use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use anyhow::{Result, anyhow};
use tracing::{instrument, debug, info};

/// Creates a new place under a city
///
/// The caller is responsible for checking that the city and the owner
/// exist; the foreign keys reject the insert otherwise.
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `city_id` - The city the place is listed under, taken from the request path
/// * `new_place` - The validated request fields
///
/// ### Returns
///
/// A Result containing the newly created Place if successful
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The database insert operation fails
#[instrument(skip(pool, new_place), fields(city_id = %city_id, name = %new_place.name))]
pub async fn create_place(pool: &DbPool, city_id: &str, new_place: NewPlaceDto) -> Result<Place> {
    debug!("Creating new place");

    let mut conn = pool.get()?;

    let place = Place::new(
        city_id.to_string(),
        new_place.user_id,
        new_place.name,
        new_place.details,
    );

    debug!("Inserting place into database with id: {}", place.get_id());

    diesel::insert_into(places::table)
        .values(place.clone())
        .execute_with_retry(&mut conn).await?;

    info!("Successfully created place with id: {}", place.get_id());
    Ok(place)
}

/// Retrieves a place from the database by its ID
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `place_id` - The ID of the place to retrieve
///
/// ### Returns
///
/// A Result containing an Option with the Place if found, or None if not found
#[instrument(skip(pool), fields(place_id = %place_id))]
pub fn get_place(pool: &DbPool, place_id: &str) -> Result<Option<Place>> {
    debug!("Retrieving place by id");

    let conn = &mut pool.get()?;
    let result = places::table
        .find(place_id)
        .select(Place::as_select())
        .first(conn)
        .optional()?;

    if let Some(ref place) = result {
        debug!("Place found with id: {}", place.get_id());
    } else {
        debug!("Place not found");
    }

    Ok(result)
}

/// Lists every place listed under a city, oldest first
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `city` - The city whose places to load
///
/// ### Returns
///
/// A Result containing the city's places, empty if it has none
#[instrument(skip(pool, city), fields(city_id = %city.get_id()))]
pub fn list_places_for_city(pool: &DbPool, city: &City) -> Result<Vec<Place>> {
    debug!("Listing places for city");

    let conn = &mut pool.get()?;
    let result = Place::belonging_to(city)
        .select(Place::as_select())
        .order_by((places::created_at.asc(), places::id.asc()))
        .load(conn)?;

    info!("Retrieved {} places", result.len());
    Ok(result)
}

/// Applies a patch to a place and returns the stored result
///
/// Fields left as `None` in the patch are untouched; `updated_at` is always
/// refreshed.
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `place_id` - The ID of the place to update
/// * `patch` - The allow-listed changes
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The database update operation fails
/// - The place is not found
#[instrument(skip(pool, patch), fields(place_id = %place_id))]
pub async fn update_place(pool: &DbPool, place_id: &str, patch: PlacePatch) -> Result<Place> {
    debug!("Updating place by id");

    #[derive(AsChangeset, Clone)]
    #[diesel(table_name = places)]
    struct PlaceChangeset {
        city_id: Option<String>,
        name: Option<String>,
        description: Option<Option<String>>,
        number_rooms: Option<i32>,
        number_bathrooms: Option<i32>,
        max_guest: Option<i32>,
        price_by_night: Option<i32>,
        latitude: Option<Option<f64>>,
        longitude: Option<Option<f64>>,
        updated_at: NaiveDateTime,
    }

    let changeset = PlaceChangeset {
        city_id: patch.city_id,
        name: patch.name,
        description: patch.description,
        number_rooms: patch.number_rooms,
        number_bathrooms: patch.number_bathrooms,
        max_guest: patch.max_guest,
        price_by_night: patch.price_by_night,
        latitude: patch.latitude,
        longitude: patch.longitude,
        updated_at: Utc::now().naive_utc(),
    };

    let mut conn = pool.get()?;

    let updated = diesel::update(places::table.find(place_id.to_string()))
        .set(changeset)
        .execute_with_retry(&mut conn).await?;

    drop(conn);

    if updated == 0 {
        return Err(anyhow!("Place with id {} not found", place_id));
    }

    let place = get_place(pool, place_id)?
        .ok_or_else(|| anyhow!("Place with id {} not found after update", place_id))?;

    info!("Successfully updated place");
    Ok(place)
}

/// Deletes a place and, through the foreign key cascade, its reviews
///
/// ### Returns
///
/// A Result indicating success (Ok(())) or an error
#[instrument(skip(pool), fields(place_id = %place_id))]
pub async fn delete_place(pool: &DbPool, place_id: &str) -> Result<()> {
    debug!("Deleting place by id");

    let mut conn = pool.get()?;

    diesel::delete(places::table.find(place_id.to_string()))
        .execute_with_retry(&mut conn).await?;

    debug!("Successfully deleted place with id: {}", place_id);
    Ok(())
}

#[instrument(skip(pool))]
pub fn count_places(pool: &DbPool) -> Result<i64> {
    let conn = &mut pool.get()?;
    let count = places::table.count().get_result(conn)?;
    Ok(count)
}
