//! Request options and query-parameter normalization.
//!
//! # Design
//! `FetchOptions` is the caller-facing option bag; `to_query` flattens it
//! into the ordered key/value pairs the transport sends. The upstream API
//! takes every list-valued filter as one comma-joined value, so normalization
//! collapses lists here rather than leaving that to each transport. The
//! function is pure and deterministic: same options, same pairs, fixed key
//! order, and unset fields emit no key at all.

use serde::{Deserialize, Serialize};

/// Flattened query parameters, in emission order.
pub type QueryParams = Vec<(String, String)>;

/// Gender filter accepted by the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// A filter value that the API accepts either as a single code or as an
/// ordered list of codes (`nat`, `inc`, `exc`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListParam {
    Single(String),
    Many(Vec<String>),
}

impl ListParam {
    /// Collapse to the wire form: a scalar passes through unchanged, a list
    /// joins with `,` preserving order. An empty list joins to the empty
    /// string — no special case.
    fn join(&self) -> String {
        match self {
            ListParam::Single(value) => value.clone(),
            ListParam::Many(values) => values.join(","),
        }
    }
}

impl From<&str> for ListParam {
    fn from(value: &str) -> Self {
        ListParam::Single(value.to_string())
    }
}

impl From<Vec<String>> for ListParam {
    fn from(values: Vec<String>) -> Self {
        ListParam::Many(values)
    }
}

impl From<Vec<&str>> for ListParam {
    fn from(values: Vec<&str>) -> Self {
        ListParam::Many(values.into_iter().map(str::to_string).collect())
    }
}

/// Caller-supplied parameters for a user-listing request.
///
/// Every field is optional and unset by default; see the upstream API
/// documentation for the effect of each filter. `seed` is passed through
/// verbatim — it seeds the upstream generator and is not interpreted locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchOptions {
    /// Number of results to return (upstream default is 1).
    pub results: Option<u32>,
    /// Restrict results to one gender.
    pub gender: Option<Gender>,
    /// Nationality code(s), e.g. `"us"` or `["us", "gb"]`.
    pub nat: Option<ListParam>,
    /// Seed for deterministic upstream generation.
    pub seed: Option<String>,
    /// Field name(s) the response should include.
    pub inc: Option<ListParam>,
    /// Field name(s) the response should exclude.
    pub exc: Option<ListParam>,
    /// Page number for paging through seeded result sets.
    pub page: Option<u32>,
}

impl FetchOptions {
    /// Flatten into query parameters.
    ///
    /// Keys are emitted in a fixed order (`results`, `gender`, `nat`, `seed`,
    /// `inc`, `exc`, `page`); numbers render in their natural decimal form.
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        if let Some(results) = self.results {
            query.push(("results".to_string(), results.to_string()));
        }
        if let Some(gender) = self.gender {
            query.push(("gender".to_string(), gender.as_str().to_string()));
        }
        if let Some(nat) = &self.nat {
            query.push(("nat".to_string(), nat.join()));
        }
        if let Some(seed) = &self.seed {
            query.push(("seed".to_string(), seed.clone()));
        }
        if let Some(inc) = &self.inc {
            query.push(("inc".to_string(), inc.join()));
        }
        if let Some(exc) = &self.exc {
            query.push(("exc".to_string(), exc.join()));
        }
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        query
    }
}
