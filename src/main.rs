//! terrapoint CLI entry point
//!
//! Random coordinates inside country boundaries

use terrapoint::cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging; per-country warnings go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
