//! Stateless HTTP request builder and response parser for the Random User API.
//!
//! # Design
//! `UserClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies. The API exposes a single
//! listing endpoint at `/api/`; the single-user operation is derived from it
//! by forcing `results=1` and taking the first record.

use tracing::{debug, warn};

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::params::FetchOptions;
use crate::types::{UserListResponse, UserRecord};

/// Public endpoint used when the host supplies no base URL.
pub const DEFAULT_BASE_URL: &str = "https://randomuser.me";

/// Synchronous, stateless client for the Random User API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`; transport failures stay on
/// the caller's side and are never reclassified here.
#[derive(Debug, Clone)]
pub struct UserClient {
    base_url: String,
}

impl Default for UserClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl UserClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a listing request for the given options.
    pub fn build_get_users(&self, options: &FetchOptions) -> HttpRequest {
        let request = HttpRequest {
            path: format!("{}/api/", self.base_url),
            query: options.to_query(),
            headers: Vec::new(),
        };
        debug!(path = %request.path, params = request.query.len(), "built user listing request");
        request
    }

    pub fn parse_get_users(&self, response: HttpResponse) -> Result<UserListResponse, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Build a single-user request: the given options with `results` forced
    /// to `1`, regardless of any caller-supplied count.
    pub fn build_get_random_user(&self, options: &FetchOptions) -> HttpRequest {
        let options = FetchOptions {
            results: Some(1),
            ..options.clone()
        };
        self.build_get_users(&options)
    }

    /// Parse a single-user response, returning the first record.
    ///
    /// An empty `results` list is a protocol violation by the upstream
    /// service and surfaces as [`ApiError::EmptyResults`].
    pub fn parse_get_random_user(&self, response: HttpResponse) -> Result<UserRecord, ApiError> {
        let payload = self.parse_get_users(response)?;
        payload
            .results
            .into_iter()
            .next()
            .ok_or(ApiError::EmptyResults)
    }
}

/// Map non-success status codes to `ApiError::Http`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    warn!(status = response.status, "unexpected status from upstream");
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
