use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user who owns places and writes reviews
#[derive(Queryable, Selectable, Identifiable, Insertable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    /// Unique identifier for the user (UUID v4 as string)
    id: String,

    /// The user's email address
    email: String,

    /// The user's first name, if given
    first_name: Option<String>,

    /// The user's last name, if given
    last_name: Option<String>,

    /// When this user was created
    created_at: NaiveDateTime,

    /// When this user was last updated
    updated_at: NaiveDateTime,
}

impl User {
    /// Creates a new user with a fresh id and timestamps
    ///
    /// ### Arguments
    ///
    /// * `email` - The user's email address
    /// * `first_name` - Optional first name
    /// * `last_name` - Optional last name
    pub fn new(email: String, first_name: Option<String>, last_name: Option<String>) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            email,
            first_name,
            last_name,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    pub fn get_email(&self) -> String {
        self.email.clone()
    }

    pub fn get_first_name(&self) -> Option<String> {
        self.first_name.clone()
    }

    pub fn get_last_name(&self) -> Option<String> {
        self.last_name.clone()
    }

    pub fn get_created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }
}
