use crate::emit::OutputFormat;
use thiserror::Error;
use tzcoords_core::table::ZoneTableError;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading zone table {path}: {source}")]
    InputReadError {
        path: String,
        source: std::io::Error,
    },
    #[error("failure building zone table: {source}")]
    TableError {
        #[from]
        source: ZoneTableError,
    },
    #[error("failure rendering {format} artifact: {message}")]
    RenderError {
        format: OutputFormat,
        message: String,
    },
    #[error("failure writing artifact {path}: {source}")]
    OutputWriteError {
        path: String,
        source: std::io::Error,
    },
}
