//! Error types for the input reader.

use thiserror::Error;

/// Errors that end input collection.
///
/// Malformed numbers and a closed stream are never reported here; the
/// reader recovers from those by prompting again or reading zero.
#[derive(Debug, Error)]
pub enum InputError {
    /// Reading from or writing to the console failed.
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}
