use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use hsconf_migrate::migrate::migrate;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        // A wrong argument count reports usage on stdout and exits 1, not
        // clap's stderr report with exit code 2.
        Err(_) => {
            println!("{}", cli::USAGE);
            std::process::exit(1);
        }
    };

    migrate(&cli.input_file, &cli.output_file)
}
