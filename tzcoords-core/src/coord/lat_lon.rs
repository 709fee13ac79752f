use super::{iso6709, CoordinateError, CoordinateField};
use serde::Serialize;
use std::{fmt::Display, str::FromStr};

/// a latitude/longitude pair in decimal degrees. values are finite, with
/// latitude in [-90, 90] and longitude in [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon {
    lat: f64,
    lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Result<LatLon, CoordinateError> {
        let lat = check_bounds(CoordinateField::Latitude, lat)?;
        let lon = check_bounds(CoordinateField::Longitude, lon)?;
        Ok(LatLon { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

fn check_bounds(field: CoordinateField, value: f64) -> Result<f64, CoordinateError> {
    if !value.is_finite() {
        return Err(CoordinateError::NotFinite { field, value });
    }
    let bound = field.max_degrees();
    if value.abs() > bound {
        return Err(CoordinateError::OutOfRange {
            field,
            text: value.to_string(),
            value,
            bound,
        });
    }
    Ok(value)
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

impl FromStr for LatLon {
    type Err = CoordinateError;

    /// parses an ISO 6709 compact coordinate pair such as `+404251-0740023`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        iso6709::decode_pair(s)
    }
}
