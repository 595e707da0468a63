// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::Rgb;

/// Background color of the ruler strip.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RulerColor {
    #[default]
    White,
    Black,
    Yellow,
    Cyan,
}

impl RulerColor {
    /// Unknown names are white.
    #[must_use]
    pub fn parse_lenient(it: &str) -> Self { it.trim().parse().unwrap_or_default() }

    #[must_use]
    pub fn background(self) -> Rgb {
        match self {
            RulerColor::White => Rgb::new(255, 255, 255),
            RulerColor::Black => Rgb::new(0, 0, 0),
            RulerColor::Yellow => Rgb::new(255, 255, 0),
            RulerColor::Cyan => Rgb::new(0, 255, 255),
        }
    }

    /// Tick and label color that reads well on [`Self::background`].
    #[must_use]
    pub fn foreground(self) -> Rgb {
        match self {
            RulerColor::Black => Rgb::new(255, 255, 255),
            RulerColor::White | RulerColor::Yellow | RulerColor::Cyan => Rgb::new(0, 0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_parse_lenient() {
        assert_eq2!(RulerColor::parse_lenient("YELLOW"), RulerColor::Yellow);
        assert_eq2!(RulerColor::parse_lenient(" cyan "), RulerColor::Cyan);
        assert_eq2!(RulerColor::parse_lenient("magenta"), RulerColor::White);
    }

    #[test]
    fn test_names_round_trip() {
        for color in RulerColor::iter() {
            assert_eq2!(RulerColor::parse_lenient(&color.to_string()), color);
        }
    }

    #[test]
    fn test_foreground_contrasts() {
        for color in RulerColor::iter() {
            assert!(color.background().color_distance(color.foreground()) > 200.0);
        }
    }
}
