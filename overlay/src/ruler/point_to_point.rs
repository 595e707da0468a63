// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InlineString, MeasurementConverter, MeasurementUnit, Point, Ppi};

/// Click and drag distance measurement between two arbitrary screen points, in the
/// ruler's current unit.
#[derive(Debug, Clone, PartialEq)]
pub struct PointToPoint {
    converter: MeasurementConverter,
    unit: MeasurementUnit,
    start: Option<Point>,
    current: Option<Point>,
    drawing: bool,
}

impl PointToPoint {
    #[must_use]
    pub fn new(unit: MeasurementUnit, ppi: Ppi) -> Self {
        Self {
            converter: MeasurementConverter::new(ppi),
            unit,
            start: None,
            current: None,
            drawing: false,
        }
    }

    pub fn start(&mut self, point: Point) {
        self.start = Some(point);
        self.current = Some(point);
        self.drawing = true;
    }

    /// Ignored unless a measurement is being drawn.
    pub fn update(&mut self, point: Point) {
        if self.drawing {
            self.current = Some(point);
        }
    }

    /// Stop drawing, keeping the measurement on screen.
    pub fn end(&mut self) { self.drawing = false; }

    pub fn clear(&mut self) {
        self.start = None;
        self.current = None;
        self.drawing = false;
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool { self.drawing }

    #[must_use]
    pub fn has_measurement(&self) -> bool { self.start.is_some() && self.current.is_some() }

    /// Both ends, once a measurement has started.
    #[must_use]
    pub fn line(&self) -> Option<(Point, Point)> { Some((self.start?, self.current?)) }

    /// Spaced readout, eg: `"141 px"` or `"1.47 in"`. Empty until a measurement starts.
    #[must_use]
    pub fn distance_label(&self) -> InlineString {
        match self.line() {
            Some((from, to)) => self.converter.distance(from, to, self.unit).spaced(),
            None => InlineString::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, pt};

    #[test]
    fn test_empty_until_started() {
        let mut it = PointToPoint::new(MeasurementUnit::Pixels, Ppi::default());
        assert_eq2!(it.distance_label(), "");
        // Not drawing, so ignored.
        it.update(pt(10, 10));
        assert!(!it.has_measurement());
    }

    #[test]
    fn test_measure_and_clear() {
        let mut it = PointToPoint::new(MeasurementUnit::Pixels, Ppi::default());
        it.start(pt(100, 100));
        assert_eq2!(it.distance_label(), "0 px");

        it.update(pt(130, 140));
        assert_eq2!(it.distance_label(), "50 px");

        it.end();
        it.update(pt(500, 500));
        assert_eq2!(it.line(), Some((pt(100, 100), pt(130, 140))));

        it.clear();
        assert_eq2!(it.distance_label(), "");
    }

    #[test]
    fn test_inches() {
        let mut it = PointToPoint::new(MeasurementUnit::Inches, Ppi::new(96.0));
        it.start(pt(0, 0));
        it.update(pt(0, 144));
        assert_eq2!(it.distance_label(), "1.50 in");
    }
}
