//! Mock implementation of the Random User API for integration tests.
//!
//! Serves the single listing endpoint `GET /api/` and honors the query
//! parameters the core emits: `results`, `gender`, `nat`, `seed`, `inc`,
//! `exc`, `page`. Generation is deterministic — the same seed, page, and
//! filters always produce the same payload, mirroring the upstream
//! service's seeded generation. `inc`/`exc` act as top-level field filters,
//! so normalized field lists can be exercised end-to-end.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use axum::{extract::Query, routing::get, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use uuid::Uuid;

const API_VERSION: &str = "1.4";
const DEFAULT_SEED: &str = "mockseed";

const MALE_FIRST: &[&str] = &["John", "Oliver", "Mateo", "Hugo", "Lars"];
const FEMALE_FIRST: &[&str] = &["Jane", "Emma", "Sofia", "Ines", "Freja"];
const LAST_NAMES: &[&str] = &["Doe", "Smith", "Garcia", "Olsen", "Meyer"];
const NAT_CODES: &[&str] = &["US", "GB", "FR", "DE", "DK"];
const CITIES: &[&str] = &["New York", "London", "Paris", "Berlin", "Copenhagen"];
const STREETS: &[&str] = &["Main St", "High St", "Rue de Rivoli", "Hauptstrasse", "Nygade"];

/// Query parameters accepted by the listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub results: Option<u32>,
    pub gender: Option<String>,
    pub nat: Option<String>,
    pub seed: Option<String>,
    pub inc: Option<String>,
    pub exc: Option<String>,
    pub page: Option<u32>,
}

pub fn app() -> Router {
    Router::new().route("/api/", get(list_users))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_users(Query(query): Query<ListQuery>) -> Json<Value> {
    let results = query.results.unwrap_or(1);
    let page = query.page.unwrap_or(1);
    let seed = query.seed.clone().unwrap_or_else(|| DEFAULT_SEED.to_string());

    let users: Vec<Value> = (0..results)
        .map(|index| {
            let ordinal = page.wrapping_sub(1).wrapping_mul(results).wrapping_add(index);
            let mut user = generate_user(
                &seed,
                ordinal,
                query.gender.as_deref(),
                query.nat.as_deref(),
            );
            apply_field_filters(&mut user, query.inc.as_deref(), query.exc.as_deref());
            user
        })
        .collect();

    Json(json!({
        "results": users,
        "info": {
            "seed": seed,
            "results": results,
            "page": page,
            "version": API_VERSION,
        }
    }))
}

/// Stable hash of (seed, ordinal) driving every generated field.
fn mix(seed: &str, ordinal: u32) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    ordinal.hash(&mut hasher);
    hasher.finish()
}

/// Pick a pool entry from a shifted slice of the hash.
fn pick(pool: &[&'static str], h: u64, shift: u64) -> &'static str {
    pool[((h >> shift) as usize) % pool.len()]
}

fn generate_user(seed: &str, ordinal: u32, gender: Option<&str>, nat: Option<&str>) -> Value {
    let h = mix(seed, ordinal);

    let gender = match gender {
        Some("female") => "female",
        Some("male") => "male",
        _ => {
            if h % 2 == 0 {
                "male"
            } else {
                "female"
            }
        }
    };
    let first = if gender == "male" {
        pick(MALE_FIRST, h, 8)
    } else {
        pick(FEMALE_FIRST, h, 8)
    };
    let last = pick(LAST_NAMES, h, 16);
    let title = if gender == "male" { "Mr" } else { "Ms" };

    // First code wins when the caller asked for several nationalities.
    let nat = nat
        .and_then(|codes| codes.split(',').next())
        .map(str::to_uppercase)
        .unwrap_or_else(|| pick(NAT_CODES, h, 24).to_string());

    let birth_year = 1950 + (h % 50) as i32;
    let birth_month = 1 + ((h >> 4) % 12) as u32;
    let birth_day = 1 + ((h >> 9) % 28) as u32;
    let dob = format!("{birth_year:04}-{birth_month:02}-{birth_day:02}T00:00:00.000Z");
    let registered_year = birth_year + 25;
    let registered = format!("{registered_year:04}-{birth_month:02}-{birth_day:02}T00:00:00.000Z");

    let username = format!("{}{}{}", first.to_lowercase(), last.to_lowercase(), ordinal);
    let login_uuid = Uuid::from_u64_pair(h, ordinal as u64);

    // Upstream encodes postcodes as strings for some locales and bare
    // numbers for others; alternate so clients see both.
    let postcode = if ordinal % 2 == 0 {
        json!(10000 + (h % 90000))
    } else {
        json!(format!("PC{:05}", h % 100000))
    };

    let portrait = format!("{}/{}.jpg", gender_portrait_dir(gender), h % 100);

    json!({
        "gender": gender,
        "name": {"title": title, "first": first, "last": last},
        "location": {
            "street": {"number": 1 + (h % 9999), "name": pick(STREETS, h, 32)},
            "city": pick(CITIES, h, 40),
            "state": pick(CITIES, h, 48),
            "country": nat,
            "postcode": postcode,
            "coordinates": {
                "latitude": format!("{:.4}", (h % 180_0000) as f64 / 10_000.0 - 90.0),
                "longitude": format!("{:.4}", ((h >> 8) % 360_0000) as f64 / 10_000.0 - 180.0),
            },
            "timezone": {"offset": "+0:00", "description": "Mock Standard Time"},
        },
        "email": format!("{username}@example.com"),
        "login": {
            "uuid": login_uuid,
            "username": username,
            "password": format!("pw{:08x}", h as u32),
            "salt": format!("{:06x}", h % 0xFFFFFF),
            "md5": format!("{:032x}", h as u128),
            "sha1": format!("{:040x}", h as u128),
            "sha256": format!("{:064x}", h as u128),
        },
        "dob": {"date": dob, "age": 2025 - birth_year},
        "registered": {"date": registered, "age": 2025 - registered_year},
        "phone": format!("({:03}) {:03}-{:04}", h % 900 + 100, (h >> 8) % 900 + 100, h % 10000),
        "cell": format!("({:03}) {:03}-{:04}", (h >> 16) % 900 + 100, (h >> 24) % 900 + 100, (h >> 8) % 10000),
        "id": {"name": "SSN", "value": format!("{:03}-{:02}-{:04}", h % 900, h % 90, h % 10000)},
        "picture": {
            "large": format!("https://randomuser.me/api/portraits/{portrait}"),
            "medium": format!("https://randomuser.me/api/portraits/med/{portrait}"),
            "thumbnail": format!("https://randomuser.me/api/portraits/thumb/{portrait}"),
        },
        "nat": nat,
    })
}

fn gender_portrait_dir(gender: &str) -> &'static str {
    if gender == "male" {
        "men"
    } else {
        "women"
    }
}

/// Keep only `inc` fields, then drop `exc` fields, both at the top level.
fn apply_field_filters(user: &mut Value, inc: Option<&str>, exc: Option<&str>) {
    let Some(map) = user.as_object_mut() else {
        return;
    };
    if let Some(inc) = inc {
        let keep: Vec<&str> = inc.split(',').collect();
        map.retain(|key, _| keep.contains(&key.as_str()));
    }
    if let Some(exc) = exc {
        for key in exc.split(',') {
            map.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic_for_a_seed() {
        let a = generate_user("abc", 3, None, None);
        let b = generate_user("abc", 3, None, None);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_vary_the_user() {
        let a = generate_user("abc", 0, None, None);
        let b = generate_user("xyz", 0, None, None);
        assert_ne!(a["login"]["uuid"], b["login"]["uuid"]);
    }

    #[test]
    fn gender_filter_is_respected() {
        let user = generate_user("abc", 0, Some("female"), None);
        assert_eq!(user["gender"], "female");
        assert_eq!(user["name"]["title"], "Ms");
    }

    #[test]
    fn first_nat_code_wins() {
        let user = generate_user("abc", 0, None, Some("gb,us"));
        assert_eq!(user["nat"], "GB");
    }

    #[test]
    fn inc_filter_keeps_only_listed_fields() {
        let mut user = generate_user("abc", 0, None, None);
        apply_field_filters(&mut user, Some("name,email"), None);
        let map = user.as_object().unwrap();
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("name"));
        assert!(map.contains_key("email"));
    }

    #[test]
    fn exc_filter_removes_listed_fields() {
        let mut user = generate_user("abc", 0, None, None);
        apply_field_filters(&mut user, None, Some("login,picture"));
        let map = user.as_object().unwrap();
        assert!(!map.contains_key("login"));
        assert!(!map.contains_key("picture"));
        assert!(map.contains_key("name"));
    }

    #[test]
    fn generated_dob_is_well_formed() {
        let user = generate_user("abc", 7, None, None);
        let date = user["dob"]["date"].as_str().unwrap();
        assert_eq!(date.len(), "1990-01-01T00:00:00.000Z".len());
        assert!(date.ends_with("T00:00:00.000Z"));
    }
}
