//! Data model for the Random User API response.
//!
//! # Design
//! These types mirror the upstream JSON schema (version 1.4) and are produced
//! only by deserialization — nothing in this crate mutates a record after it
//! is decoded. `postcode` is the one schema wart: the upstream emits it as a
//! string for some locales and a bare number for others, so it gets an
//! untagged enum with a `Display` that renders the natural decimal form
//! either way.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Top-level payload of a user-listing request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserListResponse {
    pub results: Vec<UserRecord>,
    pub info: ResponseInfo,
}

/// Request echo block accompanying every listing response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseInfo {
    pub seed: String,
    pub results: u32,
    pub page: u32,
    pub version: String,
}

/// One decoded user entity from the API response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    pub gender: String,
    pub name: Name,
    pub location: Location,
    pub email: String,
    pub login: Login,
    pub dob: DatedEvent,
    pub registered: DatedEvent,
    pub phone: String,
    pub cell: String,
    pub id: Identification,
    pub picture: Picture,
    pub nat: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Name {
    pub title: String,
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postcode: Postcode,
    pub coordinates: Coordinates,
    pub timezone: Timezone,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Street {
    pub number: u32,
    pub name: String,
}

/// Postal code as the upstream encodes it: string for alphanumeric systems,
/// bare number for purely numeric ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Postcode {
    Text(String),
    Number(i64),
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Postcode::Text(s) => f.write_str(s),
            Postcode::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Latitude/longitude, kept as the decimal strings the API sends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Timezone {
    pub offset: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Login {
    pub uuid: Uuid,
    pub username: String,
    pub password: String,
    pub salt: String,
    pub md5: String,
    pub sha1: String,
    pub sha256: String,
}

/// A date-of-birth or registration block: ISO-8601 instant plus the age the
/// upstream derived from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatedEvent {
    pub date: String,
    pub age: u32,
}

/// National identifying document (SSN, NINO, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identification {
    pub name: String,
    pub value: String,
}

/// Portrait URLs in the three sizes the API serves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Picture {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postcode_decodes_from_string() {
        let pc: Postcode = serde_json::from_str(r#""EC1A 1BB""#).unwrap();
        assert_eq!(pc, Postcode::Text("EC1A 1BB".to_string()));
        assert_eq!(pc.to_string(), "EC1A 1BB");
    }

    #[test]
    fn postcode_decodes_from_number() {
        let pc: Postcode = serde_json::from_str("10001").unwrap();
        assert_eq!(pc, Postcode::Number(10001));
        assert_eq!(pc.to_string(), "10001");
    }

    #[test]
    fn user_record_decodes_from_api_payload() {
        let raw = r#"{
            "gender": "male",
            "name": {"title": "Mr", "first": "John", "last": "Doe"},
            "location": {
                "street": {"number": 123, "name": "Main St"},
                "city": "New York",
                "state": "NY",
                "country": "USA",
                "postcode": "10001",
                "coordinates": {"latitude": "40.7128", "longitude": "-74.0060"},
                "timezone": {"offset": "-4:00", "description": "Eastern Time"}
            },
            "email": "john.doe@example.com",
            "login": {
                "uuid": "3b8f9d5c-1e2a-4c6d-9f0b-7a8e5d4c3b2a",
                "username": "johndoe",
                "password": "password",
                "salt": "salt",
                "md5": "md5",
                "sha1": "sha1",
                "sha256": "sha256"
            },
            "dob": {"date": "1990-01-01T00:00:00.000Z", "age": 32},
            "registered": {"date": "2010-01-01T00:00:00.000Z", "age": 12},
            "phone": "123-456-7890",
            "cell": "098-765-4321",
            "id": {"name": "SSN", "value": "123-45-6789"},
            "picture": {
                "large": "https://randomuser.me/api/portraits/men/1.jpg",
                "medium": "https://randomuser.me/api/portraits/med/men/1.jpg",
                "thumbnail": "https://randomuser.me/api/portraits/thumb/men/1.jpg"
            },
            "nat": "US"
        }"#;
        let user: UserRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(user.name.first, "John");
        assert_eq!(user.location.street.number, 123);
        assert_eq!(user.location.postcode, Postcode::Text("10001".to_string()));
        assert_eq!(user.dob.age, 32);
        assert_eq!(user.nat, "US");
    }

    #[test]
    fn list_response_decodes_info_block() {
        let raw = r#"{
            "results": [],
            "info": {"seed": "abc123", "results": 0, "page": 1, "version": "1.4"}
        }"#;
        let resp: UserListResponse = serde_json::from_str(raw).unwrap();
        assert!(resp.results.is_empty());
        assert_eq!(resp.info.seed, "abc123");
        assert_eq!(resp.info.version, "1.4");
    }

    #[test]
    fn user_record_roundtrips_through_json() {
        let raw = r#"{
            "gender": "female",
            "name": {"title": "Ms", "first": "Jane", "last": "Roe"},
            "location": {
                "street": {"number": 7, "name": "High St"},
                "city": "London",
                "state": "Greater London",
                "country": "United Kingdom",
                "postcode": 90210,
                "coordinates": {"latitude": "51.5", "longitude": "-0.1"},
                "timezone": {"offset": "0:00", "description": "GMT"}
            },
            "email": "jane.roe@example.com",
            "login": {
                "uuid": "00000000-0000-0000-0000-000000000001",
                "username": "janeroe",
                "password": "pw",
                "salt": "s",
                "md5": "m",
                "sha1": "s1",
                "sha256": "s256"
            },
            "dob": {"date": "1985-06-15T00:00:00.000Z", "age": 40},
            "registered": {"date": "2015-06-15T00:00:00.000Z", "age": 10},
            "phone": "020 7946 0000",
            "cell": "07700 900000",
            "id": {"name": "NINO", "value": "QQ 12 34 56 C"},
            "picture": {
                "large": "https://randomuser.me/api/portraits/women/2.jpg",
                "medium": "https://randomuser.me/api/portraits/med/women/2.jpg",
                "thumbnail": "https://randomuser.me/api/portraits/thumb/women/2.jpg"
            },
            "nat": "GB"
        }"#;
        let user: UserRecord = serde_json::from_str(raw).unwrap();
        let encoded = serde_json::to_string(&user).unwrap();
        let back: UserRecord = serde_json::from_str(&encoded).unwrap();
        assert_eq!(back, user);
    }
}
