use super::GenError;
use crate::emit::OutputFormat;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// controls how a generated zone table artifact is rendered
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct GenConfig {
    pub format: OutputFormat,
    /// decimal places written for each latitude and longitude
    pub precision: usize,
    /// path imported by generated Rust source to name the coordinate type
    pub type_path: String,
    /// name of the generated Rust static
    pub table_name: String,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Rust,
            precision: 6,
            type_path: String::from("crate::LatLon"),
            table_name: String::from("TO_COORDS"),
        }
    }
}

impl GenConfig {
    pub const MAX_PRECISION: usize = 15;
    const IDENT_REGEX: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";
    const TYPE_PATH_REGEX: &str = r"^[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*$";

    /// name of the coordinate struct, the final segment of the type path
    pub fn type_name(&self) -> &str {
        self.type_path.rsplit("::").next().unwrap_or(&self.type_path)
    }

    /// confirms the configuration can produce a valid artifact
    pub fn validate(&self) -> Result<(), GenError> {
        if self.precision > Self::MAX_PRECISION {
            return Err(GenError::ConfigurationError(format!(
                "precision {} exceeds maximum of {}",
                self.precision,
                Self::MAX_PRECISION
            )));
        }
        check_pattern("table_name", &self.table_name, Self::IDENT_REGEX)?;
        check_pattern("type_path", &self.type_path, Self::TYPE_PATH_REGEX)?;
        Ok(())
    }
}

fn check_pattern(name: &str, value: &str, pattern: &str) -> Result<(), GenError> {
    let re = Regex::new(pattern)
        .map_err(|e| GenError::ConfigurationError(format!("internal error building regex: {e}")))?;
    if re.is_match(value) {
        Ok(())
    } else {
        Err(GenError::ConfigurationError(format!(
            "{name} '{value}' does not match pattern '{pattern}'"
        )))
    }
}

impl TryFrom<&String> for GenConfig {
    type Error = GenError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let conf: GenConfig = if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| GenError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            toml::from_str(&s)
                .map_err(|e| GenError::ConfigurationError(format!("failure decoding {f}: {e}")))?
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| GenError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            serde_json::from_str(&s)
                .map_err(|e| GenError::ConfigurationError(format!("failure decoding {f}: {e}")))?
        } else {
            return Err(GenError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        conf.validate()?;
        Ok(conf)
    }
}
