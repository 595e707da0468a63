// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const DEFAULT_PPI: f64 = 96.0;

pub const CENTIMETERS_PER_INCH: f64 = 2.54;

/// Settings store PPI as a whole number, anything smaller would be saved as `0`.
pub const MIN_PPI: f64 = 1.0;

/// Pixels per inch of the display the ruler is on. Always finite and at least
/// [`MIN_PPI`]: a zero, negative or non finite value is replaced by [`DEFAULT_PPI`] on
/// construction, and a positive value below [`MIN_PPI`] is raised to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ppi(f64);

impl Default for Ppi {
    fn default() -> Self { Self(DEFAULT_PPI) }
}

impl Ppi {
    #[must_use]
    pub fn new(it: f64) -> Self {
        if it.is_finite() && it > 0.0 {
            Self(it.max(MIN_PPI))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f64 { self.0 }

    #[must_use]
    pub fn pixels_per_centimeter(self) -> f64 { self.0 / CENTIMETERS_PER_INCH }
}

impl From<f64> for Ppi {
    fn from(it: f64) -> Self { Ppi::new(it) }
}

impl From<u32> for Ppi {
    fn from(it: u32) -> Self { Ppi::new(f64::from(it)) }
}

impl Display for Ppi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

impl Serialize for Ppi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Ppi {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Ppi::new(f64::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(141.0, 141.0)]
    #[test_case(0.0, DEFAULT_PPI)]
    #[test_case(-30.0, DEFAULT_PPI)]
    #[test_case(0.4, MIN_PPI)]
    #[test_case(f64::NAN, DEFAULT_PPI)]
    #[test_case(f64::INFINITY, DEFAULT_PPI)]
    fn test_always_positive(input: f64, expected: f64) {
        assert_eq2!(Ppi::new(input).value(), expected);
    }

    #[test]
    fn test_deserialize_sanitizes() {
        let ppi: Ppi = serde_json::from_str("-1").unwrap();
        assert_eq2!(ppi, Ppi::default());
        let ppi: Ppi = serde_json::from_str("110").unwrap();
        assert_eq2!(ppi.value(), 110.0);
    }
}
