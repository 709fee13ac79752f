use serde::Serialize;
use tzcoords_core::{LatLon, ZoneId};

/// a flat, serializable row of a rendered zone table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneRecord {
    pub zone: String,
    pub lat: f64,
    pub lon: f64,
}

impl ZoneRecord {
    /// rounds both coordinates to `precision` decimal places
    pub fn new(zone: &ZoneId, coordinates: LatLon, precision: usize) -> ZoneRecord {
        ZoneRecord {
            zone: zone.to_string(),
            lat: round_to(coordinates.lat(), precision),
            lon: round_to(coordinates.lon(), precision),
        }
    }
}

fn round_to(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}
