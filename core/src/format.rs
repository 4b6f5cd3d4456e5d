//! Pure formatting helpers for a fetched `UserRecord`.
//!
//! # Design
//! Three independent functions, no I/O, no shared state. The date formatter
//! is the only one with real logic: it reads the dob string as a UTC
//! calendar date and rewrites a template by literal token substitution.
//! Token order is load-bearing — longer tokens must be consumed before their
//! single-letter prefixes, otherwise `YYYY` would be eaten by `YY` and `MM`
//! by `M`. The normative order is `MM, DD, YYYY, YY, M, D`, each token
//! replaced at its first occurrence only.

use chrono::{DateTime, Datelike, NaiveDate};
use tracing::warn;

use crate::types::UserRecord;

/// Template applied when the caller does not supply one.
pub const DEFAULT_DATE_FORMAT: &str = "MM/DD/YYYY";

/// Sentinel returned for a dob string that does not parse as a date.
pub const INVALID_DATE: &str = "Invalid Date";

/// Options for [`format_date_of_birth`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Date template; `None` means [`DEFAULT_DATE_FORMAT`].
    pub date_format: Option<String>,
}

/// Compose `"{title} {first} {last}"` and trim the ends.
///
/// An empty title or last name drops its surrounding separator space along
/// with the exterior trim, so `{title: "", first: "John", last: ""}` yields
/// `"John"`.
pub fn full_name(user: &UserRecord) -> String {
    format!(
        "{} {} {}",
        user.name.title, user.name.first, user.name.last
    )
    .trim()
    .to_string()
}

/// Compose the fixed-shape postal address
/// `"{street number} {street name}, {city}, {state}, {country}, {postcode}"`.
///
/// The structure is fixed by the template: an empty field leaves its slot
/// empty but keeps the separators. Only exterior whitespace is trimmed.
/// A numeric postcode renders in its natural decimal form.
pub fn formatted_address(user: &UserRecord) -> String {
    let location = &user.location;
    format!(
        "{} {}, {}, {}, {}, {}",
        location.street.number,
        location.street.name,
        location.city,
        location.state,
        location.country,
        location.postcode,
    )
    .trim()
    .to_string()
}

/// Format the user's date of birth with the template in `options`.
///
/// The dob string is read as a UTC calendar date; an instant carrying an
/// offset is converted to UTC before the year/month/day are extracted. A
/// string that does not parse as a date yields the literal
/// [`INVALID_DATE`] sentinel — this is reported, never thrown.
pub fn format_date_of_birth(user: &UserRecord, options: &FormatOptions) -> String {
    let template = options
        .date_format
        .as_deref()
        .unwrap_or(DEFAULT_DATE_FORMAT);

    match parse_utc_date(&user.dob.date) {
        Some(date) => apply_date_format(template, date),
        None => {
            warn!(date = %user.dob.date, "date of birth did not parse");
            INVALID_DATE.to_string()
        }
    }
}

/// Read an ISO-8601 instant as a UTC calendar date.
///
/// Strict RFC 3339 first; upstream fixtures occasionally carry unpadded
/// month/day fields that strict parsing rejects, so fall back to splitting
/// the `Y-M-D` part directly (taken as already-UTC).
fn parse_utc_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.naive_utc().date());
    }

    let date_part = raw.split('T').next().unwrap_or(raw);
    let mut fields = date_part.splitn(3, '-');
    let year: i32 = fields.next()?.parse().ok()?;
    let month: u32 = fields.next()?.parse().ok()?;
    let day: u32 = fields.next()?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Rewrite `template` by literal substring substitution.
///
/// Each token is replaced once, at its first occurrence, in the fixed order
/// `MM, DD, YYYY, YY, M, D`. Characters that are not part of a token pass
/// through unchanged.
fn apply_date_format(template: &str, date: NaiveDate) -> String {
    let year = date.year();
    let month = date.month();
    let day = date.day();

    let tokens = [
        ("MM", format!("{month:02}")),
        ("DD", format!("{day:02}")),
        ("YYYY", year.to_string()),
        ("YY", format!("{:02}", year % 100)),
        ("M", month.to_string()),
        ("D", day.to_string()),
    ];

    let mut formatted = template.to_string();
    for (token, value) in &tokens {
        formatted = formatted.replacen(token, value, 1);
    }
    formatted
}
