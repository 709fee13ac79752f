//! renders a finalized [`ZoneTable`] into an artifact and writes it to disk.
use super::{rust_source, OutputFormat, RenderContext, ZoneRecord};
use crate::app::{GenConfig, GenError};
use itertools::Itertools;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tzcoords_core::ZoneTable;

/// renders the whole artifact in memory, in the table's sorted zone order.
pub fn render(
    table: &ZoneTable,
    config: &GenConfig,
    context: &RenderContext,
) -> Result<Vec<u8>, GenError> {
    let render_error = |message: String| GenError::RenderError {
        format: config.format,
        message,
    };
    match config.format {
        OutputFormat::Rust => rust_source::render(table, config, context)
            .map(String::into_bytes)
            .map_err(|e| render_error(e.to_string())),
        OutputFormat::Json => {
            let records = records(table, config.precision);
            let mut bytes =
                serde_json::to_vec_pretty(&records).map_err(|e| render_error(e.to_string()))?;
            bytes.push(b'\n');
            Ok(bytes)
        }
        OutputFormat::Csv => {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(true)
                .from_writer(vec![]);
            for record in records(table, config.precision) {
                writer
                    .serialize(&record)
                    .map_err(|e| render_error(format!("zone '{}': {e}", record.zone)))?;
            }
            writer
                .into_inner()
                .map_err(|e| render_error(e.to_string()))
        }
    }
}

fn records(table: &ZoneTable, precision: usize) -> Vec<ZoneRecord> {
    table
        .iter()
        .map(|(zone, ll)| ZoneRecord::new(zone, ll, precision))
        .collect_vec()
}

/// writes the artifact next to its destination and renames it into place, so that
/// `path` is either left untouched or holds the complete artifact.
pub fn write_artifact(path: &Path, contents: &[u8]) -> Result<(), GenError> {
    let tmp_path = temporary_path(path);
    fs::write(&tmp_path, contents).map_err(|source| GenError::OutputWriteError {
        path: tmp_path.to_string_lossy().to_string(),
        source,
    })?;
    fs::rename(&tmp_path, path).map_err(|source| {
        if let Err(e) = fs::remove_file(&tmp_path) {
            log::warn!("unable to remove {}: {e}", tmp_path.display());
        }
        GenError::OutputWriteError {
            path: path.to_string_lossy().to_string(),
            source,
        }
    })
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}
