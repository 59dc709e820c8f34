//! Logging setup shared by the command binaries.
//!
//! Log records go to stderr so they never mix with CSV output on stdout.
//! The default level is `warn`; set RUST_LOG (e.g. RUST_LOG=debug) to see
//! per-record and per-anchor details.

use env_logger::{Builder, Env, Target};

/// Default filter used when RUST_LOG is not set
pub const DEFAULT_FILTER: &str = "warn";

/// Initializes the global logger.
///
/// Calling it more than once is harmless; later calls are ignored.
pub fn init_logger() {
    let result = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();

    if result.is_ok() {
        log::debug!("logger initialized");
    }
}
