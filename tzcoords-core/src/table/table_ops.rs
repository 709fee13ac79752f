//! fail-fast construction of a [`ZoneTable`] from a `zone1970.tab`-formatted source.
use super::{ZoneEntry, ZoneTable, ZoneTableBuilder, ZoneTableError};
use crate::{
    coord::iso6709,
    source::RawZoneRow,
    zone::{zone_ops, ZoneResolver},
};
use std::io::BufRead;

/// reads every line of `reader` and builds the zone table. the first malformed
/// coordinate, unresolvable zone or read failure aborts the whole run.
pub fn build_zone_table<R, Z>(reader: R, resolver: &Z) -> Result<ZoneTable, ZoneTableError>
where
    R: BufRead,
    Z: ZoneResolver + ?Sized,
{
    if let Some(version) = resolver.database_version() {
        log::info!("validating zone identifiers against tzdb {version}");
    }
    let mut builder = ZoneTableBuilder::new(resolver);
    for (idx, line_result) in reader.lines().enumerate() {
        let line_number = idx + 1;
        let line = match line_result {
            Ok(line) => line,
            Err(source) => {
                let error = ZoneTableError::InputReadError {
                    line: line_number,
                    source,
                };
                return Err(builder.fail(error));
            }
        };
        builder.ingest_line(line_number, &line)?;
    }
    builder.finish()
}

/// builds the zone table from an in-memory copy of the source table.
pub fn build_zone_table_from_bytes<Z>(bytes: &[u8], resolver: &Z) -> Result<ZoneTable, ZoneTableError>
where
    Z: ZoneResolver + ?Sized,
{
    build_zone_table(bytes, resolver)
}

/// decodes the coordinates and validates the zone of a single raw row.
pub fn decode_row<Z>(
    line_number: usize,
    raw: &RawZoneRow<'_>,
    resolver: &Z,
) -> Result<ZoneEntry, ZoneTableError>
where
    Z: ZoneResolver + ?Sized,
{
    let coordinates = iso6709::decode_pair(raw.coordinates).map_err(|source| {
        ZoneTableError::MalformedCoordinate {
            line: line_number,
            zone: raw.zone.to_string(),
            raw: raw.coordinates.to_string(),
            source,
        }
    })?;
    let zone = zone_ops::validate_zone(raw.zone, resolver).map_err(|source| {
        ZoneTableError::UnresolvableZone {
            line: line_number,
            zone: raw.zone.to_string(),
            source,
        }
    })?;
    Ok(ZoneEntry::new(zone, coordinates))
}
