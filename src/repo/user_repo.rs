use crate::db::{DbPool, ExecuteWithRetry};
use crate::models::User;
use crate::schema::users;
use diesel::prelude::*;
use anyhow::Result;
use tracing::{instrument, debug, info};

/// Creates a new user in the database
///
/// Users have no HTTP endpoint of their own; this is used to seed data.
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `email` - The user's email address
/// * `first_name` - Optional first name
/// * `last_name` - Optional last name
///
/// ### Returns
///
/// A Result containing the newly created User if successful
#[instrument(skip(pool), fields(email = %email))]
pub async fn create_user(
    pool: &DbPool,
    email: String,
    first_name: Option<String>,
    last_name: Option<String>,
) -> Result<User> {
    debug!("Creating new user");

    let conn = &mut pool.get()?;
    let new_user = User::new(email, first_name, last_name);

    diesel::insert_into(users::table)
        .values(new_user.clone())
        .execute_with_retry(conn).await?;

    info!("Successfully created user with id: {}", new_user.get_id());
    Ok(new_user)
}

/// Retrieves a user from the database by its ID
///
/// ### Returns
///
/// A Result containing an Option with the User if found, or None if not found
#[instrument(skip(pool), fields(user_id = %user_id))]
pub fn get_user(pool: &DbPool, user_id: &str) -> Result<Option<User>> {
    debug!("Retrieving user by id");

    let conn = &mut pool.get()?;
    let result = users::table
        .find(user_id)
        .select(User::as_select())
        .first(conn)
        .optional()?;

    if result.is_none() {
        debug!("User not found");
    }

    Ok(result)
}

#[instrument(skip(pool))]
pub fn count_users(pool: &DbPool) -> Result<i64> {
    let conn = &mut pool.get()?;
    let count = users::table.count().get_result(conn)?;
    Ok(count)
}
