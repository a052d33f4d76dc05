use serde::{Deserialize, Serialize};

/// A weight or a single spatial dimension. No unit is enforced.
pub type Measurement = f64;

/// The three spatial dimensions of a package.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: Measurement,
    pub height: Measurement,
    pub length: Measurement,
}

impl Dimensions {
    pub fn new(width: Measurement, height: Measurement, length: Measurement) -> Self {
        Self {
            width,
            height,
            length,
        }
    }

    /// Sum of width, height and length; this is what the size limit applies to.
    pub fn total(&self) -> Measurement {
        self.width + self.height + self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_total_sums_all_sides() {
        let dims = Dimensions::new(10.0, 15.5, 20.0);
        assert_eq!(dims.total(), 45.5);
    }

    #[test]
    fn test_dimensions_total_keeps_negative_sides() {
        let dims = Dimensions::new(-10.0, 20.0, 5.0);
        assert_eq!(dims.total(), 15.0);
    }
}
