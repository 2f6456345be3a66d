use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Command-line wrapper around the conversion library.
#[derive(Debug, Parser)]
#[command(
    name = "minimark",
    version,
    about = "Converts a restricted lightweight-markup dialect to HTML"
)]
struct Cli {
    /// Source markup file to convert
    source: PathBuf,
    /// Destination file for the generated HTML (overwritten if present)
    destination: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version requests print to stdout and exit cleanly;
            // actual usage errors go to stderr with status 1.
            let status = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return status;
        }
    };

    match minimark::convert_file(&cli.source, &cli.destination) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
