use std::path::PathBuf;

use clap::Parser;

/// One-line usage text, printed on stdout for argument-count errors.
pub const USAGE: &str = "Usage: hsconf-migrate <input_file> <output_file>";

#[derive(Parser, Debug)]
#[command(name = "hsconf-migrate")]
#[command(about = "Migrate a legacy flat headscale YAML config to the nested schema")]
pub struct Cli {
    /// Legacy flat config file to read.
    pub input_file: PathBuf,
    /// Destination for the migrated config.
    pub output_file: PathBuf,
}
