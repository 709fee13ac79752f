use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneError {
    #[error("zone identifier '{0}' does not match pattern '{1}'")]
    InvalidIdentifier(String, &'static str),
    #[error("zone identifier '{zone}' not found in timezone database: {reason}")]
    Unresolvable { zone: String, reason: String },
}
