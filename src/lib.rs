/// HBNB: a places and reviews REST API
///
/// This library provides the data models, database access, and HTTP
/// handlers for a small rental listing service. Cities and users are
/// reference data; places are listed under a city and owned by a user, and
/// reviews are written by a user about a place.
///
/// ### Modules
///
/// - `config`: Layered server configuration
/// - `db`: Database connection management
/// - `dto`: Request body validation and patches
/// - `errors`: API error type and its JSON rendering
/// - `handlers`: One handler per verb per resource
/// - `models`: Data structures persisted in the database
/// - `repo`: Repository layer for database operations
/// - `schema`: Database schema definitions
///
/// ### Web API
///
/// - `GET /cities/{city_id}/places`: List the places of a city
/// - `POST /cities/{city_id}/places`: Create a place in a city
/// - `GET|PUT|DELETE /places/{place_id}`: Read, update or delete a place
/// - `GET /places/{place_id}/reviews`: List the reviews of a place
/// - `POST /places/{place_id}/reviews`: Review a place
/// - `GET|PUT|DELETE /reviews/{review_id}`: Read, update or delete a review
/// - `GET /status`, `GET /stats`: Liveness and object counts

pub mod config;

/// Database connection module
pub mod db;

pub mod dto;

pub mod errors;

pub mod handlers;

/// Data models module
pub mod models;

/// Repository module for database operations
pub mod repo;

/// Database schema module
pub mod schema;

#[cfg(test)]
mod test_utils;

use axum::{
    routing::get,
    Router,
};
use anyhow::anyhow;
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use handlers::*;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Creates the application router
///
/// This function sets up the Axum router with all the API endpoints.
///
/// ### Arguments
///
/// * `pool` - The database connection pool to be shared with all handlers
///
/// ### Returns
///
/// An Axum Router configured with all routes and the database pool as state
pub fn create_app(pool: Arc<db::DbPool>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/status", get(status_handler))
        .route("/stats", get(stats_handler))
        // Places are created and listed under their city
        .route(
            "/cities/{city_id}/places",
            get(list_places_by_city_handler).post(create_place_handler),
        )
        .route(
            "/places/{place_id}",
            get(get_place_handler).put(update_place_handler).delete(delete_place_handler),
        )
        // Reviews are created and listed under their place
        .route(
            "/places/{place_id}/reviews",
            get(list_reviews_by_place_handler).post(create_review_handler),
        )
        .route(
            "/reviews/{review_id}",
            get(get_review_handler).put(update_review_handler).delete(delete_review_handler),
        )
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .layer(cors)
        .with_state(pool)
}

/// Runs the embedded migrations
///
/// ### Arguments
///
/// * `conn` - A mutable reference to a SQLite connection
///
/// ### Errors
///
/// Returns an error if any pending migration fails to apply
pub fn run_migrations(conn: &mut SqliteConnection) -> anyhow::Result<()> {
    let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|e| anyhow!(e))?;
    tracing::debug!("Applied {} migrations", applied.len());
    Ok(())
}
