use super::{RawZoneRow, ZoneRow};

pub const COMMENT_MARKER: char = '#';
pub const FIELD_DELIMITER: char = '\t';

/// column offsets of a `zone1970.tab` row
pub const COUNTRY_CODES_OFFSET: usize = 0;
pub const COORDINATES_OFFSET: usize = 1;
pub const ZONE_OFFSET: usize = 2;
pub const COMMENT_OFFSET: usize = 3;

/// a zone row must carry at least country codes, coordinates and a zone name.
pub const MIN_FIELD_COUNT: usize = ZONE_OFFSET + 1;

/// classifies one line of a zone table. fields are split on the tab character
/// only and are not trimmed; their contents are not inspected.
pub fn parse_row(line: &str) -> ZoneRow<'_> {
    if line.starts_with(COMMENT_MARKER) {
        return ZoneRow::Comment;
    }
    let fields = line.split(FIELD_DELIMITER).collect::<Vec<_>>();
    if fields.len() < MIN_FIELD_COUNT {
        return ZoneRow::TooFewFields(fields.len());
    }
    ZoneRow::Entry(RawZoneRow {
        country_codes: fields[COUNTRY_CODES_OFFSET],
        coordinates: fields[COORDINATES_OFFSET],
        zone: fields[ZONE_OFFSET],
        comment: fields.get(COMMENT_OFFSET).copied(),
    })
}
