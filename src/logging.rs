use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable that overrides the log filter (e.g. `FTAGS_LOG=filetags=trace`)
pub const LOG_ENV: &str = "FTAGS_LOG";

/// Where log output goes
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

/// Initialize structured logging.
///
/// `verbose` raises the default level from `warn` to `debug`; `FTAGS_LOG`
/// replaces the filter entirely.
pub fn init_tracing(verbose: bool, target: LogTarget<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let default_level = if verbose { "filetags=debug" } else { "filetags=warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let registry = tracing_subscriber::registry().with(filter);

    match target {
        LogTarget::Stderr => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?,
        LogTarget::File(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false),
                )
                .try_init()?
        }
    }

    Ok(())
}
