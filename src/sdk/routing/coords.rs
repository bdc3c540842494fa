use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

pub const INVALID_COORDINATES_MESSAGE: &str =
    "Invalid coordinates format. Please use format: latitude,longitude";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("Invalid coordinates format. Please use format: latitude,longitude")]
    InvalidFormat { input: String },
}

/// A latitude/longitude pair as typed by the user.
///
/// Serializes as `[lat, lon]`, which is what the optimisation service expects
/// for `start_coords` and `end_coords`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Range check left to callers; parsing never rejects out-of-range values.
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coord: Coordinate) -> Self {
        [coord.latitude, coord.longitude]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    /// Parses `"lat,lon"`. Exactly two comma-separated decimal tokens, whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoordinateError::InvalidFormat {
            input: s.to_string(),
        };

        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 2 {
            return Err(invalid());
        }

        let latitude = parse_component(parts[0]).ok_or_else(invalid)?;
        let longitude = parse_component(parts[1]).ok_or_else(invalid)?;
        Ok(Self::new(latitude, longitude))
    }
}

pub fn parse_coordinates(text: &str) -> Result<Coordinate, CoordinateError> {
    text.parse()
}

fn parse_component(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}
