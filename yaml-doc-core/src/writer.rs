use std::fs;
use std::path::Path;

use serde_yaml::Value;
use thiserror::Error;

/// Errors that can occur while writing a [`Value`] document as YAML.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to serialize the document as YAML.
    #[error("failed to write YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Failed to write output file.
    #[error("failed to write YAML file: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize a [`Value`] document into YAML text.
///
/// Output is block style with mappings rendered in insertion order, never
/// sorted alphabetically.
pub fn write(doc: &Value) -> Result<String, WriteError> {
    Ok(serde_yaml::to_string(doc)?)
}

/// Serialize a [`Value`] document and write it to `path`.
///
/// No partial-write recovery: a failure mid-write may leave `path`
/// incomplete or absent.
pub fn write_file(doc: &Value, path: &Path) -> Result<(), WriteError> {
    let text = write(doc)?;
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write, write_file};
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn write_preserves_insertion_order() {
        let doc = parse("zebra: 1\nalpha: 2\nmiddle: 3\n").expect("parse");
        let out = write(&doc).expect("write");
        assert_eq!(out, "zebra: 1\nalpha: 2\nmiddle: 3\n");
    }

    #[test]
    fn write_renders_nested_mappings_in_block_style() {
        let doc = parse("outer:\n  inner: value\n  list:\n  - one\n  - two\n").expect("parse");
        let out = write(&doc).expect("write");
        assert!(out.contains("outer:\n"));
        assert!(out.contains("  inner: value\n"));
        assert!(!out.contains('{'));
        assert!(!out.contains('['));
    }

    #[test]
    fn write_file_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.yaml");
        let doc = parse("server_url: https://example.com\nlisten_addr: 0.0.0.0:8080\n")
            .expect("parse");

        write_file(&doc, &path).expect("write file");

        let reread = parse(&std::fs::read_to_string(&path).expect("read back")).expect("reparse");
        assert_eq!(reread, doc);
    }
}
