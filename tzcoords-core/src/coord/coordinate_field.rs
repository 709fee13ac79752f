use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// names the part of an ISO 6709 token that failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateField {
    /// the whole token, before it was split
    Token,
    Latitude,
    Longitude,
}

impl CoordinateField {
    /// valid digit counts for this field: degrees, degrees+minutes,
    /// degrees+minutes+seconds.
    pub fn valid_widths(&self) -> &'static [usize] {
        match self {
            CoordinateField::Token => &[],
            CoordinateField::Latitude => &[2, 4, 6],
            CoordinateField::Longitude => &[3, 5, 7],
        }
    }

    /// number of digits used for whole degrees
    pub fn degree_digits(&self) -> usize {
        match self {
            CoordinateField::Token => 0,
            CoordinateField::Latitude => 2,
            CoordinateField::Longitude => 3,
        }
    }

    /// absolute bound on the decoded value, in decimal degrees
    pub fn max_degrees(&self) -> f64 {
        match self {
            CoordinateField::Token => 0.0,
            CoordinateField::Latitude => 90.0,
            CoordinateField::Longitude => 180.0,
        }
    }
}

impl Display for CoordinateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CoordinateField::Token => "token",
            CoordinateField::Latitude => "latitude",
            CoordinateField::Longitude => "longitude",
        };
        write!(f, "{s}")
    }
}
