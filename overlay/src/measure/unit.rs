// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The unit the ruler measures in. Parsing is case insensitive and only knows the full
/// names, so `"in"` or `"cm"` are unknown. Use [`MeasurementUnit::parse_lenient`] where an
/// unknown name should fall back to pixels rather than fail.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum MeasurementUnit {
    #[default]
    #[strum(to_string = "pixels")]
    Pixels,
    #[strum(to_string = "inches")]
    Inches,
    #[strum(to_string = "centimeters")]
    Centimeters,
}

impl MeasurementUnit {
    /// Unrecognized (or empty) names become [`MeasurementUnit::Pixels`].
    #[must_use]
    pub fn parse_lenient(it: &str) -> Self { it.trim().parse().unwrap_or_default() }

    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            MeasurementUnit::Pixels => "px",
            MeasurementUnit::Inches => "in",
            MeasurementUnit::Centimeters => "cm",
        }
    }

    /// Digits after the decimal point when formatting a value in this unit.
    #[must_use]
    pub fn precision(self) -> usize {
        match self {
            MeasurementUnit::Pixels => 0,
            MeasurementUnit::Inches | MeasurementUnit::Centimeters => 2,
        }
    }
}

/// Config files written by older versions (or by hand) may carry any string here.
impl<'de> Deserialize<'de> for MeasurementUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let it = String::deserialize(deserializer)?;
        Ok(MeasurementUnit::parse_lenient(&it))
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case("pixels", MeasurementUnit::Pixels)]
    #[test_case("Inches", MeasurementUnit::Inches)]
    #[test_case("CENTIMETERS", MeasurementUnit::Centimeters)]
    #[test_case(" inches ", MeasurementUnit::Inches)]
    #[test_case("cm", MeasurementUnit::Pixels)]
    #[test_case(" in ", MeasurementUnit::Pixels)]
    #[test_case("inch", MeasurementUnit::Pixels)]
    #[test_case("furlongs", MeasurementUnit::Pixels)]
    #[test_case("", MeasurementUnit::Pixels)]
    fn test_parse_lenient(input: &str, expected: MeasurementUnit) {
        assert_eq2!(MeasurementUnit::parse_lenient(input), expected);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for unit in MeasurementUnit::iter() {
            assert_eq2!(MeasurementUnit::parse_lenient(&unit.to_string()), unit);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&MeasurementUnit::Centimeters).unwrap();
        assert_eq2!(json, "\"centimeters\"");
        let unit: MeasurementUnit = serde_json::from_str("\"Inches\"").unwrap();
        assert_eq2!(unit, MeasurementUnit::Inches);
        let unit: MeasurementUnit = serde_json::from_str("\"bogus\"").unwrap();
        assert_eq2!(unit, MeasurementUnit::Pixels);
        let unit: MeasurementUnit = serde_json::from_str("\"in\"").unwrap();
        assert_eq2!(unit, MeasurementUnit::Pixels);
    }
}
