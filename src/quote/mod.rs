//! Shipping price calculation.

use crate::model::{Measurement, Quote};
use tracing::{debug, instrument};

/// Capability to price a package.
///
/// Implementations do not validate their inputs; callers are expected to
/// have run the package through a
/// [`ValidationService`](crate::validation::ValidationService) first.
pub trait QuoteService {
    fn calculate_quote(
        &self,
        weight: Measurement,
        width: Measurement,
        height: Measurement,
        length: Measurement,
    ) -> Quote;
}

/// Package Express pricing: volume times weight, divided by 100.
///
/// Negative inputs flow straight through and may yield a negative quote.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShippingQuoteCalculator;

impl QuoteService for ShippingQuoteCalculator {
    #[instrument(skip(self))]
    fn calculate_quote(
        &self,
        weight: Measurement,
        width: Measurement,
        height: Measurement,
        length: Measurement,
    ) -> Quote {
        let quote = Quote((width * height * length * weight) / 100.0);
        debug!(amount = quote.amount(), "Calculated quote");
        quote
    }
}
