//! # Package Express
//!
//! > **Interactive shipping quotes for a single package.**
//!
//! The program asks for a package's weight and dimensions, checks them
//! against the Package Express limits and prints a price.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Workflow ([`lifecycle`])
//! - **Role**: Runs one session from the welcome line to a quote or a rejection.
//! - **Key items**: [`ShippingQuoteApplication`](lifecycle::ShippingQuoteApplication),
//!   [`console_application`](lifecycle::console_application).
//!
//! ### 2. The Capabilities ([`input`], [`validation`], [`quote`])
//! Each is a single-purpose trait with one production implementation:
//! - [`InputService`](input::InputService) / [`ConsoleInput`](input::ConsoleInput)
//! - [`ValidationService`](validation::ValidationService) / [`PackageValidator`](validation::PackageValidator)
//! - [`QuoteService`](quote::QuoteService) / [`ShippingQuoteCalculator`](quote::ShippingQuoteCalculator)
//!
//! The workflow only sees the traits, so any of them can be swapped out.
//!
//! ### 3. The Data ([`model`])
//! Plain values: measurements, [`Dimensions`](model::Dimensions),
//! [`ValidationResult`](model::ValidationResult), [`Quote`](model::Quote).
//!
//! ## 🧪 Testing
//!
//! See [`mock`] for scripted doubles of every capability.
//!
//! ## 🚀 Running
//!
//! ```bash
//! cargo run
//!
//! # With diagnostics on stderr
//! RUST_LOG=debug cargo run
//! ```

pub mod input;
pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod quote;
pub mod validation;
