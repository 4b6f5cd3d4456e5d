//! Synchronous API client core for the Random User service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//! On top of the fetch layer sit three pure formatting helpers for a decoded
//! user record: full name, postal address, and a token-template date of
//! birth.
//!
//! # Design
//! - `UserClient` is stateless — it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - `FetchOptions::to_query` is the single place list-valued filters are
//!   collapsed into the comma-joined wire form.
//! - Formatters never fail: an unparseable date of birth is reported as the
//!   `"Invalid Date"` sentinel, not an error.
//! - Types use owned `String` / `Vec` fields; everything is safe to call
//!   from concurrent tasks because nothing here holds shared state.

pub mod client;
pub mod error;
pub mod format;
pub mod http;
pub mod params;
pub mod types;

pub use client::{UserClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use format::{
    format_date_of_birth, formatted_address, full_name, FormatOptions, DEFAULT_DATE_FORMAT,
    INVALID_DATE,
};
pub use http::{HttpRequest, HttpResponse};
pub use params::{FetchOptions, Gender, ListParam, QueryParams};
pub use types::{UserListResponse, UserRecord};
