//! generates compile-ready timezone coordinate tables from the tzdb `zone1970.tab`.
pub mod app;
pub mod emit;

/// copy of the tzdb `zone1970.tab` shipped with this crate, used when no
/// input table is given on the command line.
pub const BUNDLED_ZONE1970: &[u8] = include_bytes!("../data/zone1970.tab");
