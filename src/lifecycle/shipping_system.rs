use crate::input::ConsoleInput;
use crate::lifecycle::ShippingQuoteApplication;
use crate::quote::ShippingQuoteCalculator;
use crate::validation::{PackageValidator, ShippingLimits};
use std::io::{self, StdinLock, Stdout};

/// The application as wired for an interactive terminal.
pub type ConsoleApplication = ShippingQuoteApplication<
    ConsoleInput<StdinLock<'static>, Stdout>,
    PackageValidator,
    ShippingQuoteCalculator,
    Stdout,
>;

/// Builds the production application on stdin/stdout with the standard
/// Package Express limits.
pub fn console_application() -> ConsoleApplication {
    ShippingQuoteApplication::new(
        ConsoleInput::stdio(),
        PackageValidator::new(ShippingLimits::default()),
        ShippingQuoteCalculator,
        io::stdout(),
    )
}
