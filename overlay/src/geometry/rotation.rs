// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use crate::Point;

pub const FULL_TURN_DEGREES: f64 = 360.0;
pub const QUICK_ROTATE_STEP_DEGREES: f64 = 90.0;

/// Ruler rotation in degrees, clockwise on screen (since screen `y` grows downward).
/// Any finite value is allowed; [`Rotation::normalized`] maps it into `[0, 360)`.
/// Non finite input is treated as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    degrees: f64,
}

impl From<f64> for Rotation {
    fn from(degrees: f64) -> Self { Rotation::from_degrees(degrees) }
}

impl Rotation {
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            degrees: if degrees.is_finite() { degrees } else { 0.0 },
        }
    }

    #[must_use]
    pub fn degrees(self) -> f64 { self.degrees }

    /// The same angle in `[0, 360)`.
    #[must_use]
    pub fn normalized(self) -> f64 {
        let it = self.degrees.rem_euclid(FULL_TURN_DEGREES);
        // `rem_euclid` can round up to exactly 360 for tiny negative inputs.
        if it >= FULL_TURN_DEGREES { 0.0 } else { it }
    }

    #[must_use]
    pub fn radians(self) -> f64 { self.degrees.to_radians() }

    /// `(sin, cos)` of this angle. Exact for multiples of 90 degrees, so that axis aligned
    /// rulers never pick up floating point noise in their bounds.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn sin_cos(self) -> (f64, f64) {
        let normalized = self.normalized();
        match normalized {
            n if n == 0.0 => (0.0, 1.0),
            n if n == 90.0 => (1.0, 0.0),
            n if n == 180.0 => (0.0, -1.0),
            n if n == 270.0 => (-1.0, 0.0),
            _ => normalized.to_radians().sin_cos(),
        }
    }

    /// Unit vector along the ruler's long axis in screen space: `(cos, sin)`.
    #[must_use]
    pub fn axis(self) -> Point {
        let (sin, cos) = self.sin_cos();
        Point::new(cos, sin)
    }

    /// Rotate a point in the ruler's local frame into screen orientation (no
    /// translation).
    #[must_use]
    pub fn rotate(self, local: Point) -> Point {
        let (sin, cos) = self.sin_cos();
        Point::new(local.x * cos - local.y * sin, local.x * sin + local.y * cos)
    }

    /// Inverse of [`Self::rotate`].
    #[must_use]
    pub fn unrotate(self, screen: Point) -> Point {
        let (sin, cos) = self.sin_cos();
        Point::new(screen.x * cos + screen.y * sin, -screen.x * sin + screen.y * cos)
    }

    /// `true` for 0 degrees and any whole number of full turns.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_unrotated(self) -> bool { self.normalized() == 0.0 }

    /// Next quarter turn, wrapped into `[0, 360)`.
    #[must_use]
    pub fn quick_rotated(self) -> Self {
        Self::from_degrees((self.normalized() + QUICK_ROTATE_STEP_DEGREES) % FULL_TURN_DEGREES)
    }

    /// Labels are counter rotated by this amount so they stay upright.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn counter_rotation(self) -> f64 {
        if self.degrees == 0.0 { 0.0 } else { -self.degrees }
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{assert_approx_eq, assert_eq2, pt};

    #[test_case(0.0, 0.0)]
    #[test_case(360.0, 0.0)]
    #[test_case(450.0, 90.0)]
    #[test_case(-90.0, 270.0)]
    #[test_case(-720.0, 0.0)]
    #[test_case(137.5, 137.5)]
    fn test_normalized(degrees: f64, expected: f64) {
        assert_eq2!(Rotation::from_degrees(degrees).normalized(), expected);
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq2!(Rotation::from_degrees(f64::NAN).degrees(), 0.0);
        assert_eq2!(Rotation::from_degrees(f64::INFINITY).degrees(), 0.0);
    }

    #[test]
    fn test_is_unrotated() {
        assert!(Rotation::default().is_unrotated());
        assert!(Rotation::from_degrees(-720.0).is_unrotated());
        assert!(!Rotation::from_degrees(0.5).is_unrotated());
    }

    #[test]
    fn test_exact_quadrants() {
        assert_eq2!(Rotation::from_degrees(90.0).axis(), pt(0, 1));
        assert_eq2!(Rotation::from_degrees(180.0).axis(), pt(-1, 0));
        assert_eq2!(Rotation::from_degrees(-90.0).axis(), pt(0, -1));
    }

    #[test]
    fn test_rotate_and_unrotate() {
        let rotation = Rotation::from_degrees(30.0);
        let local = pt(120, 45);
        let back = rotation.unrotate(rotation.rotate(local));
        assert_approx_eq!(back.x, local.x);
        assert_approx_eq!(back.y, local.y);
    }

    #[test_case(0.0, 90.0)]
    #[test_case(90.0, 180.0)]
    #[test_case(270.0, 0.0)]
    #[test_case(300.0, 30.0)]
    #[test_case(-45.0, 45.0)]
    fn test_quick_rotated(degrees: f64, expected: f64) {
        assert_eq2!(Rotation::from_degrees(degrees).quick_rotated().degrees(), expected);
    }

    #[test]
    fn test_counter_rotation() {
        assert_eq2!(Rotation::from_degrees(45.0).counter_rotation(), -45.0);
        assert_eq2!(Rotation::default().counter_rotation(), 0.0);
    }
}
