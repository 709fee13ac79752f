use crate::{coord::LatLon, zone::ZoneId};
use serde::Serialize;

/// a validated zone identifier with its decoded coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneEntry {
    pub zone: ZoneId,
    #[serde(flatten)]
    pub coordinates: LatLon,
}

impl ZoneEntry {
    pub fn new(zone: ZoneId, coordinates: LatLon) -> ZoneEntry {
        ZoneEntry { zone, coordinates }
    }
}
