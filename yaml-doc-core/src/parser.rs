use std::fs;
use std::path::Path;

use serde_yaml::Value;
use thiserror::Error;

/// Errors that can occur while parsing YAML into a [`Value`] document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input text was not a well-formed YAML document.
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Failed to read input file.
    #[error("failed to read YAML file: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse YAML text into a [`Value`] document.
///
/// Mappings keep their source key order (insertion order), so a document can
/// be rewritten without reshuffling keys the operator laid out by hand.
pub fn parse(yaml: &str) -> Result<Value, ParseError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Parse a YAML file into a [`Value`] document.
pub fn parse_file(path: &Path) -> Result<Value, ParseError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}
