use hbnb::dto::StatsDto;
use hbnb::models::{Place, Review};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Error type for CLI client operations
#[derive(Debug, Error)]
pub enum ClientError {
    /// Server returned an error status with a message body
    #[error("Server error ({}): {message}", .status.as_u16())]
    Server { status: reqwest::StatusCode, message: String },
    /// Network/connection/request error
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Extension trait for checking HTTP responses and extracting server error messages
trait ResponseExt {
    /// Checks for error status and extracts the server's `{"error": ...}` message
    async fn check(self) -> Result<reqwest::Response, ClientError>;
}

impl ResponseExt for reqwest::Response {
    async fn check(self) -> Result<reqwest::Response, ClientError> {
        if self.status().is_success() {
            return Ok(self);
        }
        let status = self.status();
        let message = match self.json::<Value>().await {
            Ok(body) => body.get("error")
                .and_then(|e| e.as_str())
                .unwrap_or("Unknown error")
                .to_string(),
            Err(_) => format!("HTTP {}", status),
        };
        Err(ClientError::Server { status, message })
    }
}

/// HTTP client wrapper for communicating with the HBNB server
pub struct HbnbClient {
    /// The base URL of the server (e.g. "http://localhost:5000")
    base_url: String,
    /// The underlying HTTP client
    client: Client,
}

impl HbnbClient {
    /// Creates a new client for the server at `base_url`
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request and decodes a successful JSON response
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?.check().await?;
        Ok(response.json().await?)
    }

    // ── Index endpoints ──────────────────────────────────────────────

    /// Checks that the server is up
    pub async fn status(&self) -> Result<Value, ClientError> {
        self.send(self.client.get(self.url("/status"))).await
    }

    /// Fetches the object counts
    pub async fn stats(&self) -> Result<StatsDto, ClientError> {
        self.send(self.client.get(self.url("/stats"))).await
    }

    // ── Place endpoints ──────────────────────────────────────────────

    /// Lists the places of a city
    pub async fn list_places(&self, city_id: &str) -> Result<Vec<Place>, ClientError> {
        self.send(self.client.get(self.url(&format!("/cities/{}/places", city_id)))).await
    }

    pub async fn get_place(&self, id: &str) -> Result<Place, ClientError> {
        self.send(self.client.get(self.url(&format!("/places/{}", id)))).await
    }

    /// Creates a place under a city from a request object
    pub async fn create_place(&self, city_id: &str, body: &Value) -> Result<Place, ClientError> {
        let url = self.url(&format!("/cities/{}/places", city_id));
        self.send(self.client.post(url).json(body)).await
    }

    /// Updates a place with the given fields
    pub async fn update_place(&self, id: &str, body: &Value) -> Result<Place, ClientError> {
        let url = self.url(&format!("/places/{}", id));
        self.send(self.client.put(url).json(body)).await
    }

    pub async fn delete_place(&self, id: &str) -> Result<(), ClientError> {
        let _: Value = self.send(self.client.delete(self.url(&format!("/places/{}", id)))).await?;
        Ok(())
    }

    // ── Review endpoints ─────────────────────────────────────────────

    /// Lists the reviews of a place
    pub async fn list_reviews(&self, place_id: &str) -> Result<Vec<Review>, ClientError> {
        self.send(self.client.get(self.url(&format!("/places/{}/reviews", place_id)))).await
    }

    pub async fn get_review(&self, id: &str) -> Result<Review, ClientError> {
        self.send(self.client.get(self.url(&format!("/reviews/{}", id)))).await
    }

    /// Writes a review for a place
    pub async fn create_review(&self, place_id: &str, body: &Value) -> Result<Review, ClientError> {
        let url = self.url(&format!("/places/{}/reviews", place_id));
        self.send(self.client.post(url).json(body)).await
    }

    pub async fn update_review(&self, id: &str, body: &Value) -> Result<Review, ClientError> {
        let url = self.url(&format!("/reviews/{}", id));
        self.send(self.client.put(url).json(body)).await
    }

    pub async fn delete_review(&self, id: &str) -> Result<(), ClientError> {
        let _: Value = self.send(self.client.delete(self.url(&format!("/reviews/{}", id)))).await?;
        Ok(())
    }
}
