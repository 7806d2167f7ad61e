//! Diagnostic logging for the binary.
//!
//! Logs go to stderr through `env_logger`, so they never mix with command
//! output on stdout. `NOTEBOOK_LOG` takes an env_logger filter
//! (`debug`, `notebook::store=trace`, ...) and wins over `--verbose`.

use env_logger::{Builder, Env};

pub const LOG_ENV: &str = "NOTEBOOK_LOG";

pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Installs the global logger. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let env = Env::default().filter_or(LOG_ENV, default_level(verbose));
    let _ = Builder::from_env(env)
        .format_timestamp(None)
        .format_target(verbose)
        .try_init();
}
