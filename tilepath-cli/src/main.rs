//! tilepath - find a path across an ASCII terrain map
//!
//! ```text
//! tilepath <map-file> [--config <file.toml>] [--from x,y --to x,y]
//! ```
//!
//! Prints the map with the path drawn in. Exits with 0 when a path was
//! found, 2 when the goal is unreachable and 1 on any error. Set `RUST_LOG`
//! to see the search events.

use std::process::ExitCode;

use tilepath_cli::{Args, run};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let report = Args::parse(std::env::args().skip(1)).and_then(|args| run(&args));
    match report {
        Ok(report) => {
            println!("{report}");
            if report.found {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
        Err(err) => {
            eprintln!("tilepath: {err}");
            ExitCode::FAILURE
        }
    }
}
