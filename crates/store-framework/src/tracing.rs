//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the subscriber used by the storefront binary.
//!
//! Every store operation logs at `trace`, manager operations log their inputs at `debug` and
//! their state changes at `info`, and rejected input logs at `warn`.
//!
//! ```bash
//! # State changes only
//! RUST_LOG=info cargo run
//!
//! # Manager inputs and signals
//! RUST_LOG=debug cargo run
//!
//! # Individual store reads and writes
//! RUST_LOG=store_framework=trace,storefront=debug cargo run
//! ```

/// Initializes compact, `RUST_LOG`-filtered logging.
///
/// Calling it twice panics, as with any global subscriber; tests should not call it.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
