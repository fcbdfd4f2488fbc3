/// Repository module
///
/// This module provides the data access layer for the application.
/// It contains functions for interacting with the database: looking up
/// cities and users, and creating, retrieving, updating and deleting
/// places and reviews.
///
/// Every function takes the injected connection pool; there is no global
/// storage handle.

mod city_repo;
mod user_repo;
mod place_repo;
mod review_repo;

// Re-export all repository functions
pub use city_repo::*;
pub use user_repo::*;
pub use place_repo::*;
pub use review_repo::*;
