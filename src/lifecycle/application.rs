//! The quote workflow.
//!
//! [`ShippingQuoteApplication`] runs one session top to bottom:
//!
//! ```text
//! Start -> CollectWeight -> CollectDimensions -> ValidateDimensions -> Quote
//!               |                                       |
//!               +----------> Rejected <-----------------+
//! ```
//!
//! Nothing loops back. A rejected package ends the session and the user has
//! to start the program again.

use crate::input::{InputError, InputService};
use crate::model::{Quote, ValidationResult};
use crate::quote::QuoteService;
use crate::validation::ValidationService;
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, info, instrument};

pub const WELCOME_MESSAGE: &str =
    "Welcome to Package Express. Please follow the instructions below.";
pub const WEIGHT_PROMPT: &str = "Please enter the package weight:";
pub const WIDTH_PROMPT: &str = "Please enter the package width:";
pub const HEIGHT_PROMPT: &str = "Please enter the package height:";
pub const LENGTH_PROMPT: &str = "Please enter the package length:";
pub const QUOTE_PREFIX: &str = "Your estimated total for shipping this package is: ";
pub const THANK_YOU_MESSAGE: &str = "Thank you!";

/// Terminal state of a session.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowOutcome {
    /// Both checks passed and a quote was shown.
    Completed(Quote),
    /// A check failed; carries the message shown to the user.
    Rejected(String),
}

/// Errors that abort a session before it reaches a terminal state.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed to write to console: {0}")]
    Output(#[from] io::Error),
}

/// Coordinates input, validation and pricing for one package.
///
/// Collaborators are injected at construction so any of them can be
/// replaced by the doubles in [`crate::mock`].
pub struct ShippingQuoteApplication<I, V, Q, W> {
    input: I,
    validation: V,
    quote: Q,
    output: W,
}

impl<I, V, Q, W> ShippingQuoteApplication<I, V, Q, W>
where
    I: InputService,
    V: ValidationService,
    Q: QuoteService,
    W: Write,
{
    pub fn new(input: I, validation: V, quote: Q, output: W) -> Self {
        Self {
            input,
            validation,
            quote,
            output,
        }
    }

    /// Runs the session to a terminal state.
    #[instrument(name = "quote_session", skip(self))]
    pub fn run(&mut self) -> Result<WorkflowOutcome, WorkflowError> {
        self.say(WELCOME_MESSAGE)?;

        let weight = self.input.get_numeric_input(WEIGHT_PROMPT)?;
        if let ValidationResult::Invalid(reason) = self.validation.validate_weight(weight) {
            return self.reject(reason);
        }

        let width = self.input.get_numeric_input(WIDTH_PROMPT)?;
        let height = self.input.get_numeric_input(HEIGHT_PROMPT)?;
        let length = self.input.get_numeric_input(LENGTH_PROMPT)?;
        if let ValidationResult::Invalid(reason) =
            self.validation.validate_dimensions(width, height, length)
        {
            return self.reject(reason);
        }

        debug!(weight, width, height, length, "Package accepted");

        let quote = self.quote.calculate_quote(weight, width, height, length);
        self.say(&format!("{QUOTE_PREFIX}{quote}"))?;
        self.say(THANK_YOU_MESSAGE)?;

        info!(%quote, "Quote issued");
        Ok(WorkflowOutcome::Completed(quote))
    }

    /// Consumes the application and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Consumes the application and returns the input service and output sink.
    pub fn into_parts(self) -> (I, W) {
        (self.input, self.output)
    }

    fn reject(&mut self, reason: String) -> Result<WorkflowOutcome, WorkflowError> {
        self.say(&reason)?;
        info!(%reason, "Package rejected");
        Ok(WorkflowOutcome::Rejected(reason))
    }

    fn say(&mut self, line: &str) -> Result<(), WorkflowError> {
        writeln!(self.output, "{line}")?;
        self.output.flush()?;
        Ok(())
    }
}
