/// Data models module
///
/// This module defines the entities persisted by the API. Each model maps to
/// a database table and serializes to the JSON shape returned to clients.

mod city;
pub use city::City;

mod user;
pub use user::User;

mod place;
pub use place::{Place, PlaceDetails};

mod review;
pub use review::Review;
