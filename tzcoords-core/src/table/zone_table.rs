use super::ZoneEntry;
use crate::{coord::LatLon, zone::ZoneId};
use itertools::Itertools;
use std::collections::HashMap;

/// mapping from zone identifier to coordinates, along with the identifiers in
/// sorted order.
///
/// the key sequence returned by [`ZoneTable::keys`] is always exactly the set of
/// mapping keys sorted lexicographically, so that any two tables holding the same
/// entries iterate identically regardless of the order rows were inserted. generated
/// artifacts rely on this to keep their diffs stable between regenerations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneTable {
    coordinates: HashMap<ZoneId, LatLon>,
    keys: Vec<ZoneId>,
}

impl ZoneTable {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn get(&self, zone: &str) -> Option<LatLon> {
        self.coordinates.get(zone).copied()
    }

    pub fn contains(&self, zone: &str) -> bool {
        self.coordinates.contains_key(zone)
    }

    /// zone identifiers in lexicographic order
    pub fn keys(&self) -> &[ZoneId] {
        &self.keys
    }

    /// entries in lexicographic order of their zone identifier
    pub fn iter(&self) -> impl Iterator<Item = (&ZoneId, LatLon)> + '_ {
        self.keys
            .iter()
            .filter_map(|zone| self.coordinates.get(zone).map(|ll| (zone, *ll)))
    }

    /// owned copies of the entries in lexicographic order of their zone identifier
    pub fn entries(&self) -> Vec<ZoneEntry> {
        self.iter()
            .map(|(zone, ll)| ZoneEntry::new(zone.clone(), ll))
            .collect()
    }
}

impl From<HashMap<ZoneId, LatLon>> for ZoneTable {
    fn from(coordinates: HashMap<ZoneId, LatLon>) -> Self {
        let keys = coordinates.keys().cloned().sorted().collect_vec();
        ZoneTable { coordinates, keys }
    }
}

impl FromIterator<ZoneEntry> for ZoneTable {
    /// collects entries in order; a repeated zone keeps the value seen last.
    fn from_iter<T: IntoIterator<Item = ZoneEntry>>(iter: T) -> Self {
        let coordinates = iter
            .into_iter()
            .map(|entry| (entry.zone, entry.coordinates))
            .collect::<HashMap<_, _>>();
        ZoneTable::from(coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::ZoneTable;
    use crate::{coord::LatLon, table::ZoneEntry, zone::ZoneId};

    fn entry(zone: &str, lat: f64, lon: f64) -> ZoneEntry {
        let zone: ZoneId = zone.parse().expect("test zone id");
        ZoneEntry::new(zone, LatLon::new(lat, lon).expect("test coordinates"))
    }

    #[test]
    fn test_keys_are_sorted() {
        let table = [
            entry("Europe/Zurich", 47.38, 8.53),
            entry("America/New_York", 40.71, -74.0),
            entry("Asia/Tokyo", 35.65, 139.74),
            entry("America/Argentina/Salta", -24.78, -65.41),
        ]
        .into_iter()
        .collect::<ZoneTable>();
        let keys = table.keys().iter().map(|k| k.as_str()).collect::<Vec<_>>();
        assert_eq!(
            keys,
            vec![
                "America/Argentina/Salta",
                "America/New_York",
                "Asia/Tokyo",
                "Europe/Zurich"
            ]
        );
    }

    #[test]
    fn test_last_entry_wins() {
        let table = [
            entry("Asia/Tokyo", 1.0, 2.0),
            entry("Asia/Tokyo", 35.65, 139.74),
        ]
        .into_iter()
        .collect::<ZoneTable>();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Asia/Tokyo"), Some(LatLon::new(35.65, 139.74).unwrap()));
    }

    #[test]
    fn test_iter_follows_key_order() {
        let table = [
            entry("Europe/Paris", 48.86, 2.33),
            entry("Africa/Lagos", 6.45, 3.4),
        ]
        .into_iter()
        .collect::<ZoneTable>();
        let zones = table.iter().map(|(z, _)| z.to_string()).collect::<Vec<_>>();
        assert_eq!(zones, vec!["Africa/Lagos", "Europe/Paris"]);
        let entries = table.entries();
        assert_eq!(entries[0].zone.as_str(), "Africa/Lagos");
        assert_eq!(entries[1].coordinates.lat(), 48.86);
    }

    #[test]
    fn test_empty_table() {
        let table = ZoneTable::default();
        assert!(table.is_empty());
        assert_eq!(table.iter().count(), 0);
        assert!(!table.contains("Europe/Paris"));
        assert_eq!(table.get("Europe/Paris"), None);
    }
}
