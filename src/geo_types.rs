//! Core data types shared by the capture flow and the saved collection.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A latitude/longitude pair.
///
/// Serialized as a two-element array `[lat, lon]`, which is also the shape
/// the map surface reports clicks in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Extract a coordinate from a raw click payload.
    ///
    /// Returns `None` unless the payload is an array of exactly two finite
    /// numbers.
    pub fn from_value(raw: &Value) -> Option<Self> {
        let items = raw.as_array()?;
        if items.len() != 2 {
            return None;
        }
        let lat = items[0].as_f64()?;
        let lon = items[1].as_f64()?;
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }
        Some(Self { lat, lon })
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.lat, c.lon]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lon)
    }
}

/// A resolved address. Either both parts exist or there is no address at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Descriptive text (city, region).
    pub location: String,
    /// Route or object name.
    pub route: String,
}

/// A confirmed address entry owned by the saved collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRecord {
    pub id: String,
    pub address: Option<Address>,
    pub coordinates: Option<Coordinate>,
}

/// The point currently being inspected on the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    pub coordinates: Option<Coordinate>,
    pub address: Option<Address>,
    pub has_imagery: bool,
}
