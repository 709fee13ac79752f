//! row-level access to tzdb `zone1970.tab`-formatted tables.
pub mod row_ops;
mod zone_row;

pub use zone_row::{RawZoneRow, ZoneRow};
