//! Numeric input collection with re-prompting.
//!
//! [`ConsoleInput`] is the production [`InputService`]. It is generic over
//! any `BufRead`/`Write` pair so it can be driven from in-memory buffers in
//! tests and from stdin/stdout in the binary.

pub mod error;

pub use error::*;

use crate::model::Measurement;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::{debug, instrument, warn};

/// Shown after every line that does not parse as a number.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter a valid number.";

/// Capability to obtain one number from the user.
pub trait InputService {
    /// Shows `prompt` and returns the first valid number entered.
    ///
    /// Malformed entries are retried indefinitely. An error is only returned
    /// when the underlying stream fails.
    fn get_numeric_input(&mut self, prompt: &str) -> Result<Measurement, InputError>;
}

/// Line-oriented console reader.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Returns the underlying reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    /// Reader bound to the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InputService for ConsoleInput<R, W> {
    #[instrument(skip(self))]
    fn get_numeric_input(&mut self, prompt: &str) -> Result<Measurement, InputError> {
        loop {
            writeln!(self.writer, "{prompt}")?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                // A closed stream reads as zero rather than a malformed entry.
                warn!("Input closed, using 0");
                return Ok(0.0);
            }

            match parse_measurement(&line) {
                Some(value) => {
                    debug!(value, "Accepted measurement");
                    return Ok(value);
                }
                None => {
                    warn!(input = line.trim_end(), "Rejected malformed number");
                    writeln!(self.writer, "{INVALID_INPUT_MESSAGE}")?;
                }
            }
        }
    }
}

/// Parses one line of user input as a real number.
///
/// Surrounding whitespace is ignored. `NaN` and infinities are accepted.
pub fn parse_measurement(raw: &str) -> Option<Measurement> {
    raw.trim().parse::<Measurement>().ok()
}
