use super::{ZoneError, ZoneId, ZoneResolver};

/// checks that `name` is a well-formed zone identifier which the resolver can
/// load. the resolver is not consulted for malformed identifiers.
pub fn validate_zone<Z>(name: &str, resolver: &Z) -> Result<ZoneId, ZoneError>
where
    Z: ZoneResolver + ?Sized,
{
    let zone_id = ZoneId::try_from(name.to_string())?;
    resolver
        .resolve(zone_id.as_str())
        .map_err(|reason| ZoneError::Unresolvable {
            zone: name.to_string(),
            reason,
        })?;
    Ok(zone_id)
}

#[cfg(test)]
mod tests {
    use super::validate_zone;
    use crate::zone::{ChronoTzResolver, ZoneError, ZoneResolver};
    use std::cell::Cell;

    struct CountingResolver {
        calls: Cell<usize>,
    }

    impl ZoneResolver for CountingResolver {
        fn resolve(&self, name: &str) -> Result<(), String> {
            self.calls.set(self.calls.get() + 1);
            if name == "Europe/Andorra" {
                Ok(())
            } else {
                Err(String::from("unknown zone"))
            }
        }
    }

    #[test]
    fn test_valid_zone() {
        let zone = validate_zone("America/New_York", &ChronoTzResolver).expect("known zone");
        assert_eq!(zone.as_str(), "America/New_York");
    }

    #[test]
    fn test_unresolvable_zone_carries_identifier() {
        let resolver = CountingResolver {
            calls: Cell::new(0),
        };
        match validate_zone("Europe/Atlantis", &resolver) {
            Err(ZoneError::Unresolvable { zone, reason }) => {
                assert_eq!(zone, "Europe/Atlantis");
                assert_eq!(reason, "unknown zone");
            }
            other => panic!("expected unresolvable zone, found {other:?}"),
        }
        assert_eq!(resolver.calls.get(), 1);
    }

    #[test]
    fn test_malformed_zone_skips_resolver() {
        let resolver = CountingResolver {
            calls: Cell::new(0),
        };
        let result = validate_zone("Andorra", &resolver);
        assert!(matches!(result, Err(ZoneError::InvalidIdentifier(..))));
        assert_eq!(resolver.calls.get(), 0);
    }
}
