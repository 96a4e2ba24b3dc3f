//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout stays parseable. `I18N_EXTRACT_LOG` takes an
//! `EnvFilter` directive and wins over the `-v` flag.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "I18N_EXTRACT_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
