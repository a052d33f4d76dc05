//! # Diagnostics
//!
//! Structured logging for the quote session using the `tracing` crate.
//!
//! Every diagnostic goes to **stderr**. Stdout carries only the
//! conversation with the user, so the transcript stays identical whatever
//! the log level.
//!
//! ## Usage
//!
//! ```bash
//! # Errors only (default)
//! package-express
//!
//! # Session outcome
//! RUST_LOG=info package-express
//!
//! # Every measurement, check and calculation
//! RUST_LOG=debug package-express
//! ```
//!
//! With `RUST_LOG=debug` a completed session looks like:
//!
//! ```text
//! DEBUG quote_session:get_numeric_input: Accepted measurement prompt="Please enter the package weight:" value=10.0
//! DEBUG quote_session: Package accepted weight=10.0 width=10.0 height=10.0 length=10.0
//! DEBUG quote_session:calculate_quote: Calculated quote weight=10.0 width=10.0 height=10.0 length=10.0 amount=100.0
//!  INFO quote_session: Quote issued quote=$100.00
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
