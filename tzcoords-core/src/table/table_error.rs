use super::BuilderState;
use crate::{coord::CoordinateError, zone::ZoneError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoneTableError {
    #[error("line {line}: malformed coordinates '{raw}' for zone '{zone}': {source}")]
    MalformedCoordinate {
        line: usize,
        zone: String,
        raw: String,
        source: CoordinateError,
    },
    #[error("line {line}: unusable zone '{zone}': {source}")]
    UnresolvableZone {
        line: usize,
        zone: String,
        source: ZoneError,
    },
    #[error("failure reading zone table at line {line}: {source}")]
    InputReadError {
        line: usize,
        source: std::io::Error,
    },
    #[error("zone table builder is {0} and accepts no further rows")]
    BuilderClosed(BuilderState),
}
