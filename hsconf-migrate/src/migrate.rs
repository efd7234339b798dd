use std::path::Path;

use anyhow::{Context, Result};
use yaml_doc_core::{parse_file, write_file};

use crate::transform;

/// Migrate a legacy flat config file into the nested schema.
///
/// Loads `input`, applies the four rewrite rules, and writes the result to
/// `output`. Keys not covered by any rule pass through unchanged and in
/// their original order; new sections are appended at the end of the
/// document. The run is all-or-nothing: any failure aborts without retry,
/// and a failed write may leave `output` incomplete.
pub fn migrate(input: &Path, output: &Path) -> Result<()> {
    let mut doc =
        parse_file(input).with_context(|| format!("failed to parse {}", input.display()))?;
    let config = doc
        .as_mapping_mut()
        .with_context(|| format!("top-level document in {} is not a mapping", input.display()))?;

    transform::apply_all(config)?;

    write_file(&doc, output)
        .with_context(|| format!("failed to write output YAML {}", output.display()))?;
    Ok(())
}
