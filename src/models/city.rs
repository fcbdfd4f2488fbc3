use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A city that places are listed under
///
/// Cities are only read by the API: they are looked up to validate a place's
/// parent and to enumerate the places they own.
#[derive(Queryable, Selectable, Identifiable, Insertable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::cities)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct City {
    /// Unique identifier for the city (UUID v4 as string)
    id: String,

    /// The name of the city
    name: String,

    /// When this city was created
    created_at: NaiveDateTime,

    /// When this city was last updated
    updated_at: NaiveDateTime,
}

impl City {
    /// Creates a new city with a fresh id and timestamps
    pub fn new(name: String) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    pub fn get_name(&self) -> String {
        self.name.clone()
    }

    pub fn get_created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }

    pub fn get_updated_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.updated_at, Utc)
    }
}
