use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// enumerates the artifact formats a zone table can be rendered as
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// a Rust source file declaring a sorted static slice
    Rust,
    /// a pretty-printed JSON array of zone records
    Json,
    /// a CSV file with a `zone,lat,lon` header
    Csv,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OutputFormat::Rust => "rust",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        write!(f, "{s}")
    }
}
