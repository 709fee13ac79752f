/// classification of a single line of a zone table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneRow<'a> {
    /// line begins with the comment marker
    Comment,
    /// line has fewer tab-delimited fields than a zone row requires
    TooFewFields(usize),
    /// line carries a zone record, still undecoded
    Entry(RawZoneRow<'a>),
}

/// the raw fields of one zone record, borrowed from the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawZoneRow<'a> {
    /// comma-separated ISO 3166 country codes
    pub country_codes: &'a str,
    /// ISO 6709 compact coordinate pair
    pub coordinates: &'a str,
    /// timezone identifier, e.g. `America/New_York`
    pub zone: &'a str,
    pub comment: Option<&'a str>,
}
