use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{City, User};

/// Represents a place that can be rented
///
/// This struct maps directly to the `places` table in the database. A place
/// belongs to the city it is listed under and to the user who owns it; both
/// references are fixed when the place is created.
#[derive(Queryable, Selectable, Identifiable, Associations, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(belongs_to(City))]
#[diesel(belongs_to(User))]
#[diesel(table_name = crate::schema::places)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Place {
    /// Unique identifier for the place (UUID v4 as string)
    id: String,

    /// The city this place is listed under
    city_id: String,

    /// The user who owns this place
    user_id: String,

    /// The display name of the place
    name: String,

    /// Free-form description
    description: Option<String>,

    number_rooms: i32,

    number_bathrooms: i32,

    max_guest: i32,

    price_by_night: i32,

    latitude: Option<f64>,

    longitude: Option<f64>,

    /// When this place was created
    created_at: NaiveDateTime,

    /// When this place was last updated
    updated_at: NaiveDateTime,
}

/// The optional descriptive fields of a place
///
/// Missing fields take the same defaults as the database columns: counts and
/// price are zero, text and coordinates are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceDetails {
    pub description: Option<String>,
    pub number_rooms: i32,
    pub number_bathrooms: i32,
    pub max_guest: i32,
    pub price_by_night: i32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Place {
    /// Creates a new place under a city
    ///
    /// This method automatically generates a UUID v4 for the ID and sets
    /// the created_at and updated_at timestamps to the current time.
    ///
    /// ### Arguments
    ///
    /// * `city_id` - The city the place is listed under
    /// * `user_id` - The owner of the place
    /// * `name` - The display name of the place
    /// * `details` - The remaining descriptive fields
    ///
    /// ### Returns
    ///
    /// A new `Place` instance
    pub fn new(city_id: String, user_id: String, name: String, details: PlaceDetails) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            city_id,
            user_id,
            name,
            description: details.description,
            number_rooms: details.number_rooms,
            number_bathrooms: details.number_bathrooms,
            max_guest: details.max_guest,
            price_by_night: details.price_by_night,
            latitude: details.latitude,
            longitude: details.longitude,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    pub fn get_city_id(&self) -> String {
        self.city_id.clone()
    }

    pub fn get_user_id(&self) -> String {
        self.user_id.clone()
    }

    pub fn get_name(&self) -> String {
        self.name.clone()
    }

    /// Gets the descriptive fields of the place as one value
    pub fn get_details(&self) -> PlaceDetails {
        PlaceDetails {
            description: self.description.clone(),
            number_rooms: self.number_rooms,
            number_bathrooms: self.number_bathrooms,
            max_guest: self.max_guest,
            price_by_night: self.price_by_night,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    pub fn get_created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }

    pub fn get_updated_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.updated_at, Utc)
    }
}
