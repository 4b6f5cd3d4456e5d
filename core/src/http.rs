//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — the caller (host) is responsible for executing
//! the actual I/O. This separation keeps the core deterministic and easy to
//! test.
//!
//! The Random User API is read-only, so every request is a GET and carries no
//! body; the request type tracks only the path and the normalized query
//! parameters. All fields use owned types (`String`, `Vec`) so values can be
//! handed to any transport without lifetime concerns.

/// An HTTP GET request described as plain data.
///
/// Built by `UserClient::build_*` methods. The caller is responsible for
/// encoding `query` into the URL, executing the request against the network,
/// and returning the corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub path: String,
    /// Normalized query parameters, in emission order.
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to `UserClient::parse_*` methods for deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
