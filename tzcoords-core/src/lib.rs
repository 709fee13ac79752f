//! builds a deterministic mapping from IANA timezone identifiers to the
//! representative coordinates published in the tzdb `zone1970.tab` table.
//!
//! the pipeline reads rows ([`source`]), decodes their ISO 6709 coordinates
//! ([`coord`]), validates each zone name against a timezone database ([`zone`]),
//! and accumulates the results into a sorted [`table::ZoneTable`].
pub mod coord;
pub mod source;
pub mod table;
pub mod zone;

pub use coord::LatLon;
pub use table::{ZoneEntry, ZoneTable};
pub use zone::ZoneId;
