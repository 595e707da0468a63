// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CENTIMETERS_PER_INCH, InlineString, MeasurementUnit, Point, Ppi,
            inline_string};

/// A pixel length expressed in some unit, along with its display text.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub value: f64,
    pub unit: MeasurementUnit,
    /// Compact form: `"96px"`, `"1.00in"`, `"2.54cm"`.
    pub formatted: InlineString,
}

impl Measurement {
    /// Spaced form used in readouts and the clipboard: `"96 px"`, `"1.00 in"`.
    #[must_use]
    pub fn spaced(&self) -> InlineString { format_spaced(self.value, self.unit) }
}

/// Convert `pixels` into `unit` at the given `ppi`.
///
/// ```
/// use r3bl_ruler_overlay::{convert, MeasurementUnit, Ppi};
/// let it = convert(96.0, MeasurementUnit::Inches, Ppi::new(96.0));
/// assert_eq!(it.value, 1.0);
/// assert_eq!(it.formatted, "1.00in");
/// ```
#[must_use]
pub fn convert(pixels: f64, unit: MeasurementUnit, ppi: Ppi) -> Measurement {
    MeasurementConverter::new(ppi).convert(pixels, unit)
}

/// `value` is already in `unit`. Pixels get no decimals, the rest get two.
#[must_use]
pub fn format_measurement(value: f64, unit: MeasurementUnit) -> InlineString {
    inline_string!(
        "{value:.precision$}{suffix}",
        precision = unit.precision(),
        suffix = unit.abbreviation()
    )
}

/// Same as [`format_measurement`] with a space before the suffix.
#[must_use]
pub fn format_spaced(value: f64, unit: MeasurementUnit) -> InlineString {
    inline_string!(
        "{value:.precision$} {suffix}",
        precision = unit.precision(),
        suffix = unit.abbreviation()
    )
}

/// Pixel ⇄ inch ⇄ centimeter conversions at a fixed PPI.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeasurementConverter {
    ppi: Ppi,
}

impl MeasurementConverter {
    #[must_use]
    pub fn new(ppi: impl Into<Ppi>) -> Self { Self { ppi: ppi.into() } }

    #[must_use]
    pub fn ppi(&self) -> Ppi { self.ppi }

    #[must_use]
    pub fn pixels_to_inches(&self, pixels: f64) -> f64 { pixels / self.ppi.value() }

    #[must_use]
    pub fn inches_to_pixels(&self, inches: f64) -> f64 { inches * self.ppi.value() }

    #[must_use]
    pub fn pixels_to_centimeters(&self, pixels: f64) -> f64 {
        self.pixels_to_inches(pixels) * CENTIMETERS_PER_INCH
    }

    #[must_use]
    pub fn centimeters_to_pixels(&self, centimeters: f64) -> f64 {
        self.inches_to_pixels(centimeters / CENTIMETERS_PER_INCH)
    }

    #[must_use]
    pub fn pixels_to(&self, unit: MeasurementUnit, pixels: f64) -> f64 {
        match unit {
            MeasurementUnit::Pixels => pixels,
            MeasurementUnit::Inches => self.pixels_to_inches(pixels),
            MeasurementUnit::Centimeters => self.pixels_to_centimeters(pixels),
        }
    }

    #[must_use]
    pub fn to_pixels(&self, unit: MeasurementUnit, value: f64) -> f64 {
        match unit {
            MeasurementUnit::Pixels => value,
            MeasurementUnit::Inches => self.inches_to_pixels(value),
            MeasurementUnit::Centimeters => self.centimeters_to_pixels(value),
        }
    }

    #[must_use]
    pub fn convert(&self, pixels: f64, unit: MeasurementUnit) -> Measurement {
        let value = self.pixels_to(unit, pixels);
        Measurement {
            value,
            unit,
            formatted: format_measurement(value, unit),
        }
    }

    /// Like [`Self::convert`], with the unit given by name. Unknown names measure in
    /// pixels.
    #[must_use]
    pub fn convert_named(&self, pixels: f64, unit_name: &str) -> Measurement {
        self.convert(pixels, MeasurementUnit::parse_lenient(unit_name))
    }

    /// Euclidean distance between two screen points, converted.
    #[must_use]
    pub fn distance(&self, from: Point, to: Point, unit: MeasurementUnit) -> Measurement {
        self.convert(from.distance_to(to), unit)
    }
}
