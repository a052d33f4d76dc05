//! # Mock Services
//!
//! Test doubles for the three capabilities the workflow depends on.
//!
//! Each mock keeps a queue of expectations. Calls are matched in order against
//! that queue; an unexpected call or an argument mismatch panics. Call
//! `verify()` at the end of a test to assert nothing expected was left unused.
//!
//! Mocks are cheap handles over shared state: hand `mock.service()` to the
//! application and keep `mock` to verify afterwards.
//!
//! This module is public rather than `#[cfg(test)]` so it is usable from the
//! integration tests under `tests/`.
//!
//! # Example
//! ```ignore
//! let mut input = MockInput::new();
//! input.expect_prompt(WEIGHT_PROMPT).return_value(60.0);
//!
//! let mut validation = MockValidator::new();
//! validation.expect_weight(60.0).return_invalid("too heavy");
//!
//! let mut app = ShippingQuoteApplication::new(
//!     input.service(),
//!     validation.service(),
//!     MockQuote::new().service(),
//!     Vec::new(),
//! );
//! app.run().unwrap();
//!
//! input.verify();
//! validation.verify();
//! ```

use crate::input::{InputError, InputService};
use crate::model::{Measurement, Quote, ValidationResult};
use crate::quote::QuoteService;
use crate::validation::ValidationService;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

type Queue<T> = Arc<Mutex<VecDeque<T>>>;

fn next<T>(queue: &Queue<T>, call: &str) -> T {
    let mut exps = queue.lock().unwrap();
    match exps.pop_front() {
        Some(expectation) => expectation,
        None => panic!("Unexpected call: {call}"),
    }
}

fn assert_drained<T>(queue: &Queue<T>, name: &str) {
    let exps = queue.lock().unwrap();
    if !exps.is_empty() {
        panic!("Not all {name} expectations were met. {} remaining", exps.len());
    }
}

// =============================================================================
// INPUT
// =============================================================================

struct InputExpectation {
    prompt: String,
    response: Result<Measurement, InputError>,
}

/// Scripted [`InputService`].
#[derive(Clone, Default)]
pub struct MockInput {
    expectations: Queue<InputExpectation>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle to pass to the application.
    pub fn service(&self) -> MockInput {
        self.clone()
    }

    /// Expects the next read to show `prompt`.
    pub fn expect_prompt(&mut self, prompt: impl Into<String>) -> InputExpectationBuilder {
        InputExpectationBuilder {
            prompt: prompt.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Every prompt shown so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn verify(&self) {
        assert_drained(&self.expectations, "input");
    }
}

impl InputService for MockInput {
    fn get_numeric_input(&mut self, prompt: &str) -> Result<Measurement, InputError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let expectation = next(&self.expectations, &format!("get_numeric_input({prompt:?})"));
        assert_eq!(expectation.prompt, prompt, "prompt mismatch");
        expectation.response
    }
}

/// Builder for input expectations.
pub struct InputExpectationBuilder {
    prompt: String,
    expectations: Queue<InputExpectation>,
}

impl InputExpectationBuilder {
    /// The read returns `value`.
    pub fn return_value(self, value: Measurement) {
        self.push(Ok(value));
    }

    /// The read fails with `error`.
    pub fn return_err(self, error: InputError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Measurement, InputError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(InputExpectation {
            prompt: self.prompt,
            response,
        });
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

enum ValidationExpectation {
    Weight {
        weight: Measurement,
        response: ValidationResult,
    },
    Dimensions {
        dimensions: (Measurement, Measurement, Measurement),
        response: ValidationResult,
    },
}

/// Scripted [`ValidationService`].
#[derive(Clone, Default)]
pub struct MockValidator {
    expectations: Queue<ValidationExpectation>,
}

impl MockValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn service(&self) -> MockValidator {
        self.clone()
    }

    /// Expects `validate_weight(weight)`.
    pub fn expect_weight(&mut self, weight: Measurement) -> ValidationExpectationBuilder {
        ValidationExpectationBuilder {
            call: PendingCheck::Weight(weight),
            expectations: self.expectations.clone(),
        }
    }

    /// Expects `validate_dimensions(width, height, length)`.
    pub fn expect_dimensions(
        &mut self,
        width: Measurement,
        height: Measurement,
        length: Measurement,
    ) -> ValidationExpectationBuilder {
        ValidationExpectationBuilder {
            call: PendingCheck::Dimensions((width, height, length)),
            expectations: self.expectations.clone(),
        }
    }

    pub fn verify(&self) {
        assert_drained(&self.expectations, "validation");
    }
}

impl ValidationService for MockValidator {
    fn validate_weight(&self, weight: Measurement) -> ValidationResult {
        match next(&self.expectations, &format!("validate_weight({weight})")) {
            ValidationExpectation::Weight {
                weight: expected,
                response,
            } => {
                assert_eq!(expected, weight, "weight mismatch");
                response
            }
            ValidationExpectation::Dimensions { .. } => {
                panic!("Expected validate_dimensions, got validate_weight({weight})")
            }
        }
    }

    fn validate_dimensions(
        &self,
        width: Measurement,
        height: Measurement,
        length: Measurement,
    ) -> ValidationResult {
        let call = format!("validate_dimensions({width}, {height}, {length})");
        match next(&self.expectations, &call) {
            ValidationExpectation::Dimensions {
                dimensions,
                response,
            } => {
                assert_eq!(dimensions, (width, height, length), "dimensions mismatch");
                response
            }
            ValidationExpectation::Weight { .. } => {
                panic!("Expected validate_weight, got {call}")
            }
        }
    }
}

enum PendingCheck {
    Weight(Measurement),
    Dimensions((Measurement, Measurement, Measurement)),
}

/// Builder for validation expectations.
pub struct ValidationExpectationBuilder {
    call: PendingCheck,
    expectations: Queue<ValidationExpectation>,
}

impl ValidationExpectationBuilder {
    pub fn return_valid(self) {
        self.push(ValidationResult::Valid);
    }

    pub fn return_invalid(self, reason: impl Into<String>) {
        self.push(ValidationResult::invalid(reason));
    }

    fn push(self, response: ValidationResult) {
        let expectation = match self.call {
            PendingCheck::Weight(weight) => ValidationExpectation::Weight { weight, response },
            PendingCheck::Dimensions(dimensions) => ValidationExpectation::Dimensions {
                dimensions,
                response,
            },
        };
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// QUOTE
// =============================================================================

struct QuoteExpectation {
    inputs: (Measurement, Measurement, Measurement, Measurement),
    response: Quote,
}

/// Scripted [`QuoteService`].
#[derive(Clone, Default)]
pub struct MockQuote {
    expectations: Queue<QuoteExpectation>,
}

impl MockQuote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn service(&self) -> MockQuote {
        self.clone()
    }

    /// Expects `calculate_quote(weight, width, height, length)`.
    pub fn expect_quote(
        &mut self,
        weight: Measurement,
        width: Measurement,
        height: Measurement,
        length: Measurement,
    ) -> QuoteExpectationBuilder {
        QuoteExpectationBuilder {
            inputs: (weight, width, height, length),
            expectations: self.expectations.clone(),
        }
    }

    pub fn verify(&self) {
        assert_drained(&self.expectations, "quote");
    }
}

impl QuoteService for MockQuote {
    fn calculate_quote(
        &self,
        weight: Measurement,
        width: Measurement,
        height: Measurement,
        length: Measurement,
    ) -> Quote {
        let call = format!("calculate_quote({weight}, {width}, {height}, {length})");
        let expectation = next(&self.expectations, &call);
        assert_eq!(
            expectation.inputs,
            (weight, width, height, length),
            "quote inputs mismatch"
        );
        expectation.response
    }
}

/// Builder for quote expectations.
pub struct QuoteExpectationBuilder {
    inputs: (Measurement, Measurement, Measurement, Measurement),
    expectations: Queue<QuoteExpectation>,
}

impl QuoteExpectationBuilder {
    pub fn return_quote(self, amount: f64) {
        self.expectations.lock().unwrap().push_back(QuoteExpectation {
            inputs: self.inputs,
            response: Quote(amount),
        });
    }
}
