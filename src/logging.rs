//! Logging setup.
//!
//! Plain `fmt` output filtered by `RUST_LOG`, defaulting to `info`.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info";

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second init (e.g. from tests) is harmless, so the error is dropped.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
