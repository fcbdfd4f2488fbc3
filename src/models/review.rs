use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Place, User};

/// Represents a review a user left for a place
///
/// This struct maps directly to the `reviews` table in the database. The
/// place and author are fixed at creation; only the text can change.
#[derive(Queryable, Selectable, Identifiable, Associations, Insertable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(belongs_to(Place))]
#[diesel(belongs_to(User))]
#[diesel(table_name = crate::schema::reviews)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Review {
    /// Unique identifier for the review (UUID v4 as string)
    id: String,

    /// The place being reviewed
    place_id: String,

    /// The author of the review
    user_id: String,

    /// The body of the review
    text: String,

    /// When this review was created
    created_at: NaiveDateTime,

    /// When this review was last updated
    updated_at: NaiveDateTime,
}

impl Review {
    /// Creates a new review for a place
    ///
    /// ### Arguments
    ///
    /// * `place_id` - The place being reviewed
    /// * `user_id` - The author of the review
    /// * `text` - The body of the review
    ///
    /// ### Returns
    ///
    /// A new `Review` instance with a fresh id and timestamps
    pub fn new(place_id: String, user_id: String, text: String) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            place_id,
            user_id,
            text,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    pub fn get_place_id(&self) -> String {
        self.place_id.clone()
    }

    pub fn get_user_id(&self) -> String {
        self.user_id.clone()
    }

    pub fn get_text(&self) -> String {
        self.text.clone()
    }

    pub fn get_created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }

    pub fn get_updated_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.updated_at, Utc)
    }
}
