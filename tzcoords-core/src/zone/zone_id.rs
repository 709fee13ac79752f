use super::ZoneError;
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, fmt::Display, str::FromStr};

/// an IANA timezone identifier of the form `Region/City` or
/// `Region/Subregion/City`. ordering is plain lexicographic string ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZoneId(String);

impl ZoneId {
    /// a pattern to match two- or three-part zone identifiers
    pub const ZONE_ID_REGEX: &'static str = r"^[A-Za-z0-9_+\-]+(/[A-Za-z0-9_+\-]+){1,2}$";

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ZoneId {
    type Error = ZoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let regex = RegexBuilder::new(Self::ZONE_ID_REGEX)
            .build()
            .map_err(|_| ZoneError::InvalidIdentifier(value.clone(), Self::ZONE_ID_REGEX))?;
        if regex.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(ZoneError::InvalidIdentifier(value, Self::ZONE_ID_REGEX))
        }
    }
}

impl FromStr for ZoneId {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZoneId::try_from(s.to_string())
    }
}

impl From<ZoneId> for String {
    fn from(value: ZoneId) -> Self {
        value.0
    }
}

impl Borrow<str> for ZoneId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ZoneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ZoneId;
    use crate::zone::ZoneError;

    #[test]
    fn test_valid_identifiers() {
        for name in [
            "Europe/Andorra",
            "America/New_York",
            "America/Argentina/Buenos_Aires",
            "America/Port-au-Prince",
            "Etc/GMT+5",
        ] {
            let id: ZoneId = name.parse().unwrap_or_else(|e| panic!("{name}: {e}"));
            assert_eq!(id.as_str(), name);
        }
    }

    #[test]
    fn test_invalid_identifiers() {
        for name in [
            "",
            "UTC",
            "America/",
            "/London",
            "America//New_York",
            "A/B/C/D",
            "America/New York",
            "America/New_York ",
        ] {
            match name.parse::<ZoneId>() {
                Err(ZoneError::InvalidIdentifier(value, _)) => assert_eq!(value, name),
                other => panic!("'{name}' should be rejected, found {other:?}"),
            }
        }
    }

    #[test]
    fn test_lexicographic_ordering() {
        let a: ZoneId = "America/Adak".parse().unwrap();
        let b: ZoneId = "America/Argentina/Salta".parse().unwrap();
        let c: ZoneId = "America/Aruba".parse().unwrap();
        assert!(a < b);
        assert!(b < c);
    }
}
