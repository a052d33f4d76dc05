//! Package Express business rules.
//!
//! Two independent checks, each against a fixed threshold held in
//! [`ShippingLimits`]. A value equal to the limit passes; only a value
//! strictly above it is rejected. There is no lower bound.

use crate::model::{Dimensions, Measurement, ValidationResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

pub const TOO_HEAVY_MESSAGE: &str =
    "Package too heavy to be shipped via Package Express. Have a good day.";
pub const TOO_BIG_MESSAGE: &str = "Package too big to be shipped via Package Express.";

/// Upper limits enforced by [`PackageValidator`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShippingLimits {
    pub max_weight: Measurement,
    /// Applies to width + height + length.
    pub max_dimensions: Measurement,
}

impl Default for ShippingLimits {
    fn default() -> Self {
        Self {
            max_weight: 50.0,
            max_dimensions: 50.0,
        }
    }
}

/// Capability to check a package against the shipping rules.
pub trait ValidationService {
    fn validate_weight(&self, weight: Measurement) -> ValidationResult;

    fn validate_dimensions(
        &self,
        width: Measurement,
        height: Measurement,
        length: Measurement,
    ) -> ValidationResult;
}

/// Stateless validator for the Package Express limits.
#[derive(Debug, Clone, Default)]
pub struct PackageValidator {
    limits: ShippingLimits,
}

impl PackageValidator {
    pub fn new(limits: ShippingLimits) -> Self {
        Self { limits }
    }
}

impl ValidationService for PackageValidator {
    #[instrument(skip(self))]
    fn validate_weight(&self, weight: Measurement) -> ValidationResult {
        if weight > self.limits.max_weight {
            debug!(max_weight = self.limits.max_weight, "Weight over limit");
            return ValidationResult::invalid(TOO_HEAVY_MESSAGE);
        }
        ValidationResult::Valid
    }

    #[instrument(skip(self))]
    fn validate_dimensions(
        &self,
        width: Measurement,
        height: Measurement,
        length: Measurement,
    ) -> ValidationResult {
        let total = Dimensions::new(width, height, length).total();
        if total > self.limits.max_dimensions {
            debug!(total, max_dimensions = self.limits.max_dimensions, "Dimensions over limit");
            return ValidationResult::invalid(TOO_BIG_MESSAGE);
        }
        ValidationResult::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_at_or_below_limit_is_valid() {
        let validator = PackageValidator::default();
        for weight in [50.0, 49.99, 10.0, 0.0, -5.0] {
            assert_eq!(
                validator.validate_weight(weight),
                ValidationResult::Valid,
                "weight {weight}"
            );
        }
    }

    #[test]
    fn test_weight_above_limit_is_rejected() {
        let validator = PackageValidator::default();
        for weight in [50.0001, 51.0, 1000.0] {
            assert_eq!(
                validator.validate_weight(weight),
                ValidationResult::Invalid(TOO_HEAVY_MESSAGE.to_string()),
                "weight {weight}"
            );
        }
    }

    #[test]
    fn test_dimension_sum_at_limit_is_valid() {
        let validator = PackageValidator::default();
        assert_eq!(validator.validate_dimensions(0.0, 0.0, 50.0), ValidationResult::Valid);
        assert_eq!(validator.validate_dimensions(20.0, 20.0, 10.0), ValidationResult::Valid);
        assert_eq!(validator.validate_dimensions(-100.0, 100.0, 50.0), ValidationResult::Valid);
    }

    #[test]
    fn test_dimension_sum_above_limit_is_rejected() {
        let validator = PackageValidator::default();
        assert_eq!(
            validator.validate_dimensions(20.0, 20.0, 20.0),
            ValidationResult::Invalid(TOO_BIG_MESSAGE.to_string())
        );
        assert_ne!(validator.validate_dimensions(0.0, 0.0, 50.5), ValidationResult::Valid);
    }

    #[test]
    fn test_a_single_large_side_is_fine_when_sum_fits() {
        // Only the sum is limited, not individual sides.
        let validator = PackageValidator::default();
        assert_eq!(validator.validate_dimensions(80.0, -20.0, -10.0), ValidationResult::Valid);
    }

    #[test]
    fn test_custom_limits_are_applied() {
        let validator = PackageValidator::new(ShippingLimits {
            max_weight: 5.0,
            max_dimensions: 10.0,
        });
        assert_eq!(validator.validate_weight(5.0), ValidationResult::Valid);
        assert_ne!(validator.validate_weight(5.5), ValidationResult::Valid);
        assert_ne!(validator.validate_dimensions(4.0, 4.0, 4.0), ValidationResult::Valid);
    }
}
