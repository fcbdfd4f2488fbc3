use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::ApiError;
use crate::models::PlaceDetails;

/// A request body that has been checked to be a JSON object
pub type JsonObject = serde_json::Map<String, Value>;

/// Fields a client can never overwrite on a place
pub const PLACE_PROTECTED_FIELDS: &[&str] = &["id", "user_id", "created_at", "updated_at"];

/// Fields a client can never overwrite on a review
pub const REVIEW_PROTECTED_FIELDS: &[&str] = &["id", "user_id", "place_id", "created_at", "updated_at"];

/// Turns the raw body extraction into a JSON object
///
/// Handlers take the body as `Result<Json<Value>, JsonRejection>` so that
/// path lookups can fail with 404 before the body is judged. A missing
/// content type, malformed JSON, or a JSON value that is not an object all
/// become "Not a JSON".
pub fn parse_body(body: Result<Json<Value>, JsonRejection>) -> Result<JsonObject, ApiError> {
    match body {
        Ok(Json(Value::Object(object))) => Ok(object),
        Ok(Json(other)) => {
            debug!("Request body is JSON but not an object: {}", other);
            Err(ApiError::not_a_json())
        }
        Err(rejection) => {
            debug!("Rejected request body: {}", rejection);
            Err(ApiError::not_a_json())
        }
    }
}

/// Like [`parse_body`], but an empty object is also "Not a JSON"
///
/// Review bodies always need at least one field, so `{}` is rejected before
/// any field check runs.
pub fn parse_nonempty_body(body: Result<Json<Value>, JsonRejection>) -> Result<JsonObject, ApiError> {
    let object = parse_body(body)?;
    if object.is_empty() {
        debug!("Request body is an empty object");
        return Err(ApiError::not_a_json());
    }
    Ok(object)
}

/// Reads a required string field from a request object
///
/// ### Errors
///
/// `Missing <field>` when the key is absent, or a type error when the value
/// is not a string
pub fn required_str(object: &JsonObject, field: &str) -> Result<String, ApiError> {
    match object.get(field) {
        None => Err(ApiError::missing(field)),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(ApiError::BadRequest(format!("{} must be a string", field))),
    }
}

/// Data transfer object for creating a new place
///
/// Built from the request object after `user_id` and `name` are known to be
/// present. Unknown keys are dropped, so a client cannot choose the id, the
/// timestamps, or (since the path supplies it) the city.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct NewPlaceDto {
    /// The owner of the place
    pub user_id: String,

    /// The display name of the place
    pub name: String,

    /// Everything else, defaulted when absent
    #[serde(flatten)]
    pub details: PlaceDetails,
}

impl NewPlaceDto {
    /// Validates a request object field by field and builds the DTO
    pub fn from_object(object: JsonObject) -> Result<Self, ApiError> {
        required_str(&object, "user_id")?;
        required_str(&object, "name")?;

        serde_json::from_value(Value::Object(object))
            .map_err(|e| ApiError::BadRequest(format!("Invalid place: {}", e)))
    }
}

/// Data transfer object for creating a new review
///
/// The place comes from the request path, never from the body.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewReviewDto {
    /// The author of the review
    pub user_id: String,

    /// The body of the review
    pub text: String,
}

impl NewReviewDto {
    /// Validates a request object field by field and builds the DTO
    pub fn from_object(object: JsonObject) -> Result<Self, ApiError> {
        let user_id = required_str(&object, "user_id")?;
        let text = required_str(&object, "text")?;

        Ok(Self { user_id, text })
    }
}

/// The outcome of merging a request object into an allow-listed patch
#[derive(Debug, Clone, PartialEq)]
pub struct Patch<T> {
    /// The fields the request is allowed to change
    pub changes: T,

    /// Protected keys present in the request and left untouched
    pub ignored: Vec<String>,
}

/// Changes a client may apply to a place
///
/// `None` leaves a field as it is. Nullable columns use a nested option so
/// that `Some(None)` clears them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacePatch {
    pub city_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub number_rooms: Option<i32>,
    pub number_bathrooms: Option<i32>,
    pub max_guest: Option<i32>,
    pub price_by_night: Option<i32>,
    pub latitude: Option<Option<f64>>,
    pub longitude: Option<Option<f64>>,
}

impl PlacePatch {
    /// Merges a request object into a place patch
    ///
    /// Protected keys are skipped and reported in `Patch::ignored`.
    ///
    /// ### Errors
    ///
    /// Returns `BadRequest` for a key that is not a place field or a value of
    /// the wrong type
    pub fn from_object(object: JsonObject) -> Result<Patch<Self>, ApiError> {
        let mut changes = PlacePatch::default();
        let mut ignored = Vec::new();

        for (key, value) in object {
            if PLACE_PROTECTED_FIELDS.contains(&key.as_str()) {
                ignored.push(key);
                continue;
            }

            match key.as_str() {
                "city_id" => changes.city_id = Some(field_value(&key, value)?),
                "name" => changes.name = Some(field_value(&key, value)?),
                "description" => changes.description = Some(field_value(&key, value)?),
                "number_rooms" => changes.number_rooms = Some(field_value(&key, value)?),
                "number_bathrooms" => changes.number_bathrooms = Some(field_value(&key, value)?),
                "max_guest" => changes.max_guest = Some(field_value(&key, value)?),
                "price_by_night" => changes.price_by_night = Some(field_value(&key, value)?),
                "latitude" => changes.latitude = Some(field_value(&key, value)?),
                "longitude" => changes.longitude = Some(field_value(&key, value)?),
                _ => return Err(unknown_field(&key)),
            }
        }

        Ok(Patch { changes, ignored })
    }
}

/// Changes a client may apply to a review
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewPatch {
    pub text: Option<String>,
}

impl ReviewPatch {
    /// Merges a request object into a review patch
    ///
    /// Protected keys are skipped and reported in `Patch::ignored`.
    ///
    /// ### Errors
    ///
    /// Returns `BadRequest` for a key that is not a review field or a value
    /// of the wrong type
    pub fn from_object(object: JsonObject) -> Result<Patch<Self>, ApiError> {
        let mut changes = ReviewPatch::default();
        let mut ignored = Vec::new();

        for (key, value) in object {
            if REVIEW_PROTECTED_FIELDS.contains(&key.as_str()) {
                ignored.push(key);
                continue;
            }

            match key.as_str() {
                "text" => changes.text = Some(field_value(&key, value)?),
                _ => return Err(unknown_field(&key)),
            }
        }

        Ok(Patch { changes, ignored })
    }
}

fn field_value<T: DeserializeOwned>(key: &str, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value)
        .map_err(|e| ApiError::BadRequest(format!("Invalid {}: {}", key, e)))
}

fn unknown_field(key: &str) -> ApiError {
    ApiError::BadRequest(format!("Unknown field: {}", key))
}

/// Number of stored objects per entity, as returned by `/stats`
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsDto {
    pub cities: i64,
    pub places: i64,
    pub reviews: i64,
    pub users: i64,
}
