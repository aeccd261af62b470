//! Diagnostic tracing for the deployer.
//!
//! # Separation of Concerns
//!
//! - **Tracing (this module)**: step spans, exit codes, failed-step summaries.
//!   Filtered by `RUST_LOG`, written to stderr, never carries the token.
//!
//! - **Deploy transcript (`deploy` / `io::process::run_echoed`)**: the `>>>`
//!   command echoes, captured git output and the confirmation banner. Always
//!   written to stdout, unaffected by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset.
///
/// # Example
/// ```bash
/// RUST_LOG=deployer=debug deployer deploy
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
