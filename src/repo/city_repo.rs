use crate::db::{DbPool, ExecuteWithRetry};
use crate::models::City;
use crate::schema::cities;
use diesel::prelude::*;
use anyhow::Result;
use tracing::{instrument, debug, info};

/// Creates a new city in the database
///
/// Cities have no HTTP endpoint of their own; this is used to seed data.
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `name` - The name of the city
///
/// ### Returns
///
/// A Result containing the newly created City if successful
#[instrument(skip(pool), fields(name = %name))]
pub async fn create_city(pool: &DbPool, name: String) -> Result<City> {
    debug!("Creating new city");

    let conn = &mut pool.get()?;
    let new_city = City::new(name);

    diesel::insert_into(cities::table)
        .values(new_city.clone())
        .execute_with_retry(conn).await?;

    info!("Successfully created city with id: {}", new_city.get_id());
    Ok(new_city)
}

/// Retrieves a city from the database by its ID
///
/// ### Returns
///
/// A Result containing an Option with the City if found, or None if not found
#[instrument(skip(pool), fields(city_id = %city_id))]
pub fn get_city(pool: &DbPool, city_id: &str) -> Result<Option<City>> {
    debug!("Retrieving city by id");

    let conn = &mut pool.get()?;
    let result = cities::table
        .find(city_id)
        .select(City::as_select())
        .first(conn)
        .optional()?;

    if result.is_none() {
        debug!("City not found");
    }

    Ok(result)
}

/// Counts the cities in the database
#[instrument(skip(pool))]
pub fn count_cities(pool: &DbPool) -> Result<i64> {
    let conn = &mut pool.get()?;
    let count = cities::table.count().get_result(conn)?;
    Ok(count)
}
