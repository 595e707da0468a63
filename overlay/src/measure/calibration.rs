// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Derive the display's PPI from its advertised diagonal size.
//!
//! `ppi = round(sqrt(w² + h²) / diagonal_inches)` where `w` and `h` are the physical
//! resolution (logical size × display scale).

use crate::{InlineString, inline_string};

pub const MIN_DIAGONAL_INCHES: f64 = 5.0;
pub const MAX_DIAGONAL_INCHES: f64 = 100.0;

/// Returned by the sentinel API when the diagonal can't be used.
pub const NO_PPI: u32 = 0;

/// The display being calibrated, in logical units plus its scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayResolution {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

impl DisplayResolution {
    #[must_use]
    pub fn new(width: f64, height: f64, scale: f64) -> Self {
        Self {
            width,
            height,
            scale: crate::sanitize_scale(scale),
        }
    }

    /// Length of the screen diagonal in physical pixels.
    #[must_use]
    pub fn physical_diagonal(&self) -> f64 {
        let width = self.width * self.scale;
        let height = self.height * self.scale;
        (width * width + height * height).sqrt()
    }
}

#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq)]
pub enum CalibrationError {
    #[error("Please enter a valid number")]
    #[diagnostic(
        code(ruler::calibration::not_a_number),
        help("Type the screen size in inches, eg: 15.6")
    )]
    NotANumber { input: String },

    #[error("Screen diagonal must be between 5 and 100 inches")]
    #[diagnostic(code(ruler::calibration::out_of_range))]
    OutOfRange { diagonal: f64 },
}

/// Parse and range check a diagonal typed by the user. Leading and trailing whitespace
/// is ignored; `NaN` and infinities are not numbers.
///
/// # Errors
///
/// Returns [`CalibrationError::NotANumber`] or [`CalibrationError::OutOfRange`].
pub fn try_parse_diagonal(input: &str) -> Result<f64, CalibrationError> {
    let diagonal = input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|it| it.is_finite())
        .ok_or_else(|| CalibrationError::NotANumber {
            input: input.to_string(),
        })?;

    if (MIN_DIAGONAL_INCHES..=MAX_DIAGONAL_INCHES).contains(&diagonal) {
        Ok(diagonal)
    } else {
        Err(CalibrationError::OutOfRange { diagonal })
    }
}

/// PPI for a display of `diagonal_inches`, or the reason it can't be computed.
///
/// # Errors
///
/// Returns [`CalibrationError::OutOfRange`] if the diagonal is outside
/// `[5, 100]` inches.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn try_calibrate(
    diagonal_inches: f64,
    display: DisplayResolution,
) -> Result<u32, CalibrationError> {
    if !(MIN_DIAGONAL_INCHES..=MAX_DIAGONAL_INCHES).contains(&diagonal_inches) {
        return Err(CalibrationError::OutOfRange {
            diagonal: diagonal_inches,
        });
    }
    // Diagonal >= 5, so this is finite and non negative.
    Ok((display.physical_diagonal() / diagonal_inches).round() as u32)
}

/// Sentinel flavored [`try_calibrate`]: [`NO_PPI`] (0) when the diagonal is out of
/// range.
///
/// ```
/// use r3bl_ruler_overlay::calibrate;
/// assert_eq!(calibrate(15.6, 1920.0, 1080.0, 1.0), 141);
/// assert_eq!(calibrate(2.0, 1920.0, 1080.0, 1.0), 0);
/// ```
#[must_use]
pub fn calibrate(diagonal_inches: f64, pixel_width: f64, pixel_height: f64, scale: f64) -> u32 {
    try_calibrate(
        diagonal_inches,
        DisplayResolution::new(pixel_width, pixel_height, scale),
    )
    .unwrap_or(NO_PPI)
}

/// Inverse of [`calibrate`]: the diagonal a display would need to have this PPI. `0`
/// when `ppi` is not positive.
#[must_use]
pub fn diagonal_from_ppi(ppi: f64, display: DisplayResolution) -> f64 {
    if ppi.is_finite() && ppi > 0.0 {
        display.physical_diagonal() / ppi
    } else {
        0.0
    }
}

/// State of the calibration dialog: what the user typed, and what it works out to.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationForm {
    display: DisplayResolution,
    current_ppi: f64,
    input: String,
}

impl CalibrationForm {
    /// The input is pre-filled with the diagonal matching `current_ppi`, to one decimal.
    #[must_use]
    pub fn new(current_ppi: f64, display: DisplayResolution) -> Self {
        let diagonal = diagonal_from_ppi(current_ppi, display);
        let input = if diagonal > 0.0 {
            format!("{diagonal:.1}")
        } else {
            String::new()
        };
        Self {
            display,
            current_ppi,
            input,
        }
    }

    #[must_use]
    pub fn input(&self) -> &str { &self.input }

    #[must_use]
    pub fn current_ppi(&self) -> f64 { self.current_ppi }

    pub fn set_input(&mut self, input: impl Into<String>) { self.input = input.into(); }

    /// An empty (or blank) input is not an error, there's just nothing to calibrate yet.
    #[must_use]
    pub fn validation_error(&self) -> Option<CalibrationError> {
        if self.input.trim().is_empty() {
            return None;
        }
        try_parse_diagonal(&self.input).err()
    }

    #[must_use]
    pub fn calculated_ppi(&self) -> Option<u32> {
        let diagonal = try_parse_diagonal(&self.input).ok()?;
        try_calibrate(diagonal, self.display)
            .ok()
            .filter(|it| *it > NO_PPI)
    }

    /// What the dialog shows next to the input: the PPI, or `--`.
    #[must_use]
    pub fn calculated_ppi_label(&self) -> InlineString {
        match self.calculated_ppi() {
            Some(ppi) => inline_string!("{ppi}"),
            None => InlineString::from("--"),
        }
    }

    #[must_use]
    pub fn can_calibrate(&self) -> bool {
        self.calculated_ppi().is_some() && self.validation_error().is_none()
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{assert_approx_eq, assert_eq2};

    fn full_hd() -> DisplayResolution { DisplayResolution::new(1920.0, 1080.0, 1.0) }

    #[test]
    fn test_laptop_panel() {
        assert_eq2!(calibrate(15.6, 1920.0, 1080.0, 1.0), 141);
    }

    #[test]
    fn test_scale_multiplies_resolution() {
        // 1280x720 logical at 1.5 is 1920x1080 physical.
        assert_eq2!(calibrate(15.6, 1280.0, 720.0, 1.5), 141);
    }

    #[test_case(4.99)]
    #[test_case(100.01)]
    #[test_case(-15.6)]
    #[test_case(f64::NAN)]
    fn test_out_of_range_is_sentinel(diagonal: f64) {
        assert_eq2!(calibrate(diagonal, 1920.0, 1080.0, 1.0), NO_PPI);
    }

    #[test_case("abc", "Please enter a valid number")]
    #[test_case("NaN", "Please enter a valid number")]
    #[test_case("4", "Screen diagonal must be between 5 and 100 inches")]
    #[test_case("250", "Screen diagonal must be between 5 and 100 inches")]
    fn test_error_messages(input: &str, expected: &str) {
        let error = try_parse_diagonal(input).unwrap_err();
        assert_eq2!(error.to_string(), expected);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq2!(try_parse_diagonal("5"), Ok(5.0));
        assert_eq2!(try_parse_diagonal(" 100 "), Ok(100.0));
    }

    #[test]
    fn test_diagonal_from_ppi() {
        assert_approx_eq!(diagonal_from_ppi(141.0, full_hd()), 2202.9071 / 141.0, 1e-4);
        assert_eq2!(diagonal_from_ppi(0.0, full_hd()), 0.0);
    }

    #[test]
    fn test_form_prefills_from_current_ppi() {
        let form = CalibrationForm::new(141.0, full_hd());
        assert_eq2!(form.input(), "15.6");
        assert_eq2!(form.calculated_ppi(), Some(141));
        assert!(form.can_calibrate());
    }

    #[test]
    fn test_form_empty_input_is_not_an_error() {
        let mut form = CalibrationForm::new(96.0, full_hd());
        form.set_input("   ");
        assert_eq2!(form.validation_error(), None);
        assert_eq2!(form.calculated_ppi(), None);
        assert_eq2!(form.calculated_ppi_label(), "--");
        assert!(!form.can_calibrate());
    }

    #[test]
    fn test_form_invalid_input() {
        let mut form = CalibrationForm::new(96.0, full_hd());
        form.set_input("fifteen");
        assert!(matches!(
            form.validation_error(),
            Some(CalibrationError::NotANumber { .. })
        ));
        assert!(!form.can_calibrate());

        form.set_input("27");
        assert_eq2!(form.validation_error(), None);
        assert_eq2!(form.calculated_ppi_label(), "82");
    }
}
