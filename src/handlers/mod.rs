/// Web API Handlers
///
/// This module contains the handlers for the RESTful API endpoints.
/// Each handler resolves the entities named in its path, validates the
/// request body, calls the repository, and returns JSON with the matching
/// status code.

mod place_handlers;
mod review_handlers;
mod index_handlers;

// Re-export all handlers
pub use place_handlers::*;
pub use review_handlers::*;
pub use index_handlers::*;
