//! logmunge Binary
//!
//! Converts every `*.log` in the current directory to CSV.

use logmunge::{Config, Engine};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,logmunge=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("logmunge v{}", logmunge::VERSION);

    let engine = match Engine::new(Config::default()) {
        Ok(e) => e,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let summary = match engine.run() {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("Run aborted: {}", e);
            std::process::exit(1);
        }
    };

    let converted = summary.converted().count();
    tracing::info!("Converted {} file(s)", converted);

    if summary.has_failures() {
        std::process::exit(1);
    }
}
