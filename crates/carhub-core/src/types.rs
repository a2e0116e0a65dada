//! Vehicle record and filter types shared by every helper.
//!
//! Field names of [`Car`] follow the car data API's JSON so responses
//! deserialize directly.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::form_urlencoded;

/// Drivetrain as reported by the car data API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Drive {
    #[default]
    Fwd,
    Rwd,
    Awd,
    #[serde(rename = "4wd")]
    FourWheel,
}

impl fmt::Display for Drive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Drive::Fwd => "fwd",
            Drive::Rwd => "rwd",
            Drive::Awd => "awd",
            Drive::FourWheel => "4wd",
        };
        f.write_str(s)
    }
}

/// Transmission: `a` (automatic) or `m` (manual).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Transmission {
    #[default]
    #[serde(rename = "a")]
    Automatic,
    #[serde(rename = "m")]
    Manual,
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transmission::Automatic => f.write_str("Automatic"),
            Transmission::Manual => f.write_str("Manual"),
        }
    }
}

/// One car's specifications. A value object with no identity.
///
/// Fields missing from a record take their `Default` value; electric cars,
/// for instance, come without `cylinders` and `displacement`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Car {
    pub city_mpg: u32,
    pub class: String,
    pub combination_mpg: u32,
    pub cylinders: u32,
    pub displacement: f64,
    pub drive: Drive,
    pub fuel_type: String,
    pub highway_mpg: u32,
    pub make: String,
    pub model: String,
    pub transmission: Transmission,
    pub year: i32,
}

/// Search constraints. Every field is optional; absent fields are not sent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CarFilters {
    pub manufacturer: Option<String>,
    pub year: Option<i32>,
    pub fuel: Option<String>,
    pub model: Option<String>,
    /// Accepted for callers' bookkeeping; never sent to the API.
    pub limit: Option<u32>,
}

impl CarFilters {
    /// Reads filters back out of a location query string (leading `?` optional).
    ///
    /// Empty values and numbers that fail to parse are treated as absent.
    /// When a key repeats, the first usable value wins.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut filters = CarFilters::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "manufacturer" if filters.manufacturer.is_none() => {
                    filters.manufacturer = Some(value.to_string())
                }
                "year" if filters.year.is_none() => filters.year = value.parse().ok(),
                "fuel" if filters.fuel.is_none() => filters.fuel = Some(value.to_string()),
                "model" if filters.model.is_none() => filters.model = Some(value.to_string()),
                "limit" if filters.limit.is_none() => filters.limit = value.parse().ok(),
                _ => {}
            }
        }
        filters
    }
}
