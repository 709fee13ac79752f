use super::{GenConfig, GenError};
use crate::{
    emit::{emit_ops, OutputFormat, RenderContext},
    BUNDLED_ZONE1970,
};
use clap::Parser;
use std::{borrow::Cow, path::Path};
use tzcoords_core::{
    table::table_ops,
    zone::{ChronoTzResolver, ZoneResolver},
};

/// command line tool generating a timezone-to-coordinates lookup table from
/// the tzdb zone1970.tab file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct GenAppArguments {
    /// output file name for the generated artifact
    #[arg(long)]
    pub output: String,
    /// zone1970.tab-formatted input table. defaults to the copy bundled with this tool
    #[arg(long)]
    pub input: Option<String>,
    /// TOML or JSON file with artifact rendering parameters
    #[arg(long)]
    pub configuration_file: Option<String>,
    /// artifact format, overrides the configuration file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// decimal places per coordinate, overrides the configuration file
    #[arg(long)]
    pub precision: Option<usize>,
}

impl GenAppArguments {
    /// builds, renders and writes the zone table. `invocation` is recorded in the
    /// header of generated Rust source.
    pub fn run(&self, invocation: &str) -> Result<(), GenError> {
        let conf = self.configuration()?;

        let source: Cow<'_, [u8]> = match &self.input {
            None => {
                log::info!("reading bundled zone1970.tab");
                Cow::Borrowed(BUNDLED_ZONE1970)
            }
            Some(path) => {
                log::info!("reading zone table from {path}");
                let bytes = std::fs::read(path).map_err(|source| GenError::InputReadError {
                    path: path.clone(),
                    source,
                })?;
                Cow::Owned(bytes)
            }
        };

        let resolver = ChronoTzResolver;
        let table = table_ops::build_zone_table_from_bytes(&source, &resolver)?;

        let context = RenderContext {
            invocation: invocation.to_string(),
            tzdb_version: resolver.database_version().map(String::from),
        };
        let artifact = emit_ops::render(&table, &conf, &context)?;
        emit_ops::write_artifact(Path::new(&self.output), &artifact)?;
        log::info!(
            "wrote {} zones as {} to {}",
            table.len(),
            conf.format,
            self.output
        );
        Ok(())
    }

    /// reads the configuration file, if any, and applies command line overrides.
    pub fn configuration(&self) -> Result<GenConfig, GenError> {
        let mut conf = match &self.configuration_file {
            None => GenConfig::default(),
            Some(f) => {
                log::info!("reading tzcoords-gen configuration from {f}");
                GenConfig::try_from(f)?
            }
        };
        if let Some(format) = self.format {
            conf.format = format;
        }
        if let Some(precision) = self.precision {
            conf.precision = precision;
        }
        conf.validate()?;
        Ok(conf)
    }
}
