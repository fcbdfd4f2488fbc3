use crate::db::{DbPool, ExecuteWithRetry};
use crate::dto::ReviewPatch;
use crate::models::{Place, Review};
use crate::schema::reviews;
use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use anyhow::{Result, anyhow};
use tracing::{instrument, debug, info};

/// Records a review for a place
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `place_id` - The place being reviewed, taken from the request path
/// * `user_id` - The author of the review
/// * `text` - The body of the review
///
/// ### Returns
///
/// A Result containing the newly created Review if successful
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The place or user does not exist (foreign key violation)
/// - The database insert operation fails
#[instrument(skip(pool, text), fields(place_id = %place_id, user_id = %user_id))]
pub async fn create_review(pool: &DbPool, place_id: &str, user_id: &str, text: String) -> Result<Review> {
    debug!("Creating new review");

    let mut conn = pool.get()?;
    let review = Review::new(place_id.to_string(), user_id.to_string(), text);

    diesel::insert_into(reviews::table)
        .values(review.clone())
        .execute_with_retry(&mut conn).await?;

    info!("Successfully created review with id: {}", review.get_id());
    Ok(review)
}

/// Retrieves a review from the database by its ID
///
/// ### Returns
///
/// A Result containing an Option with the Review if found, or None if not found
#[instrument(skip(pool), fields(review_id = %review_id))]
pub fn get_review(pool: &DbPool, review_id: &str) -> Result<Option<Review>> {
    debug!("Retrieving review by id");

    let conn = &mut pool.get()?;
    let result = reviews::table
        .find(review_id)
        .select(Review::as_select())
        .first(conn)
        .optional()?;

    if result.is_none() {
        debug!("Review not found");
    }

    Ok(result)
}

/// Lists every review of a place, oldest first
#[instrument(skip(pool, place), fields(place_id = %place.get_id()))]
pub fn list_reviews_for_place(pool: &DbPool, place: &Place) -> Result<Vec<Review>> {
    debug!("Listing reviews for place");

    let conn = &mut pool.get()?;
    let result = Review::belonging_to(place)
        .select(Review::as_select())
        .order_by((reviews::created_at.asc(), reviews::id.asc()))
        .load(conn)?;

    info!("Retrieved {} reviews", result.len());
    Ok(result)
}

/// Applies a patch to a review and returns the stored result
///
/// ### Errors
///
/// Returns an error if the review is not found or the update fails
#[instrument(skip(pool, patch), fields(review_id = %review_id))]
pub async fn update_review(pool: &DbPool, review_id: &str, patch: ReviewPatch) -> Result<Review> {
    debug!("Updating review by id");

    #[derive(AsChangeset, Clone)]
    #[diesel(table_name = reviews)]
    struct ReviewChangeset {
        text: Option<String>,
        updated_at: NaiveDateTime,
    }

    let changeset = ReviewChangeset {
        text: patch.text,
        updated_at: Utc::now().naive_utc(),
    };

    let mut conn = pool.get()?;

    let updated = diesel::update(reviews::table.find(review_id.to_string()))
        .set(changeset)
        .execute_with_retry(&mut conn).await?;

    drop(conn);

    if updated == 0 {
        return Err(anyhow!("Review with id {} not found", review_id));
    }

    get_review(pool, review_id)?
        .ok_or_else(|| anyhow!("Review with id {} not found after update", review_id))
}

/// Deletes a review by its ID
#[instrument(skip(pool), fields(review_id = %review_id))]
pub async fn delete_review(pool: &DbPool, review_id: &str) -> Result<()> {
    debug!("Deleting review by id");

    let mut conn = pool.get()?;

    diesel::delete(reviews::table.find(review_id.to_string()))
        .execute_with_retry(&mut conn).await?;

    debug!("Successfully deleted review with id: {}", review_id);
    Ok(())
}

#[instrument(skip(pool))]
pub fn count_reviews(pool: &DbPool) -> Result<i64> {
    let conn = &mut pool.get()?;
    let count = reviews::table.count().get_result(conn)?;
    Ok(count)
}
