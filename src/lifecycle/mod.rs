//! Session orchestration.
//!
//! - [`ShippingQuoteApplication`] - the workflow coordinator
//! - [`console_application`] - wires the production services to the terminal
//! - [`setup_tracing`] - initializes diagnostics

pub mod application;
pub mod shipping_system;
pub mod tracing;

pub use application::*;
pub use shipping_system::*;
pub use self::tracing::*;
