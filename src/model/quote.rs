use serde::{Deserialize, Serialize};
use std::fmt;

/// A shipping price for one package.
///
/// The amount is kept unrounded. Rounding to cents only happens when the
/// quote is displayed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Quote(pub f64);

impl Quote {
    pub fn amount(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_two_decimals() {
        assert_eq!(Quote(100.0).to_string(), "$100.00");
        assert_eq!(Quote(0.0).to_string(), "$0.00");
        assert_eq!(Quote(12.3456).to_string(), "$12.35");
    }

    #[test]
    fn test_display_keeps_negative_amounts() {
        assert_eq!(Quote(-5.0).to_string(), "$-5.00");
    }

    #[test]
    fn test_amount_is_unrounded() {
        assert_eq!(Quote(1.23456).amount(), 1.23456);
    }
}
