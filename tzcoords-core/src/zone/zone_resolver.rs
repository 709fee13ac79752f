use chrono_tz::Tz;
use std::str::FromStr;

/// capability to load a timezone by name from some timezone database.
pub trait ZoneResolver {
    /// confirms `name` resolves to a timezone, or explains why it does not.
    fn resolve(&self, name: &str) -> Result<(), String>;

    /// version string of the backing database, when known.
    fn database_version(&self) -> Option<&str> {
        None
    }
}

/// resolves zone names against the tzdb compiled into `chrono-tz`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChronoTzResolver;

impl ZoneResolver for ChronoTzResolver {
    fn resolve(&self, name: &str) -> Result<(), String> {
        Tz::from_str(name)
            .map(|_| ())
            .map_err(|e| format!("{e} (tzdb {})", chrono_tz::IANA_TZDB_VERSION))
    }

    fn database_version(&self) -> Option<&str> {
        Some(chrono_tz::IANA_TZDB_VERSION)
    }
}
