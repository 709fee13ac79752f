use super::{table_ops, BuilderState, ZoneEntry, ZoneTable, ZoneTableError};
use crate::{
    coord::LatLon,
    source::{row_ops, ZoneRow},
    zone::{ZoneId, ZoneResolver},
};
use std::collections::HashMap;

/// accumulates validated zone rows into a [`ZoneTable`].
///
/// the first decode or validation failure moves the builder into
/// [`BuilderState::Failed`] and drops everything collected so far. once failed or
/// finished, every further call returns [`ZoneTableError::BuilderClosed`].
pub struct ZoneTableBuilder<'a, Z>
where
    Z: ZoneResolver + ?Sized,
{
    resolver: &'a Z,
    coordinates: HashMap<ZoneId, LatLon>,
    state: BuilderState,
    rows_skipped: usize,
    rows_replaced: usize,
}

impl<'a, Z> ZoneTableBuilder<'a, Z>
where
    Z: ZoneResolver + ?Sized,
{
    pub fn new(resolver: &'a Z) -> ZoneTableBuilder<'a, Z> {
        ZoneTableBuilder {
            resolver,
            coordinates: HashMap::new(),
            state: BuilderState::Empty,
            rows_skipped: 0,
            rows_replaced: 0,
        }
    }

    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// number of distinct zones collected so far
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// parses, decodes and validates one line of the source table. comment
    /// lines and lines with too few fields are skipped.
    pub fn ingest_line(&mut self, line_number: usize, line: &str) -> Result<(), ZoneTableError> {
        self.check_open()?;
        match row_ops::parse_row(line) {
            ZoneRow::Comment => Ok(()),
            ZoneRow::TooFewFields(found) => {
                log::debug!(
                    "skipping line {line_number}: found {found} fields, expected at least {}",
                    row_ops::MIN_FIELD_COUNT
                );
                self.rows_skipped += 1;
                Ok(())
            }
            ZoneRow::Entry(raw) => match table_ops::decode_row(line_number, &raw, self.resolver) {
                Ok(entry) => self.insert(entry),
                Err(e) => Err(self.fail(e)),
            },
        }
    }

    /// adds an already-validated entry. a zone seen before is overwritten.
    pub fn insert(&mut self, entry: ZoneEntry) -> Result<(), ZoneTableError> {
        self.check_open()?;
        let ZoneEntry { zone, coordinates } = entry;
        if let Some(previous) = self.coordinates.get(&zone) {
            log::warn!("zone '{zone}' listed more than once, replacing {previous} with {coordinates}");
            self.rows_replaced += 1;
        }
        self.coordinates.insert(zone, coordinates);
        self.state = BuilderState::Accumulating;
        Ok(())
    }

    /// completes the table. the builder is closed afterward.
    pub fn finish(&mut self) -> Result<ZoneTable, ZoneTableError> {
        self.check_open()?;
        let coordinates = std::mem::take(&mut self.coordinates);
        self.state = BuilderState::Finalized;
        let table = ZoneTable::from(coordinates);
        log::info!(
            "built zone table with {} zones ({} rows skipped, {} rows replaced)",
            table.len(),
            self.rows_skipped,
            self.rows_replaced
        );
        Ok(table)
    }

    /// moves the builder into the failed state, discarding partial results.
    pub(crate) fn fail(&mut self, error: ZoneTableError) -> ZoneTableError {
        self.coordinates.clear();
        self.state = BuilderState::Failed;
        error
    }

    fn check_open(&self) -> Result<(), ZoneTableError> {
        if self.state.is_open() {
            Ok(())
        } else {
            Err(ZoneTableError::BuilderClosed(self.state))
        }
    }
}
