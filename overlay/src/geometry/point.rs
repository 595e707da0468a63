// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign}};

/// A 2D coordinate or offset in logical units. Used for screen positions, surface
/// translations and anchor points alike; the field or argument name says which frame it
/// belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Shorthand for [`Point::new`].
#[must_use]
pub fn pt(x: impl Into<f64>, y: impl Into<f64>) -> Point { Point::new(x.into(), y.into()) }

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Dot product, used to project a drag delta onto the ruler axis.
    #[must_use]
    pub fn dot(self, other: Point) -> f64 { self.x * other.x + self.y * other.y }

    #[must_use]
    pub fn is_finite(self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point { Point::new(self.x + rhs.x, self.y + rhs.y) }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) { *self = *self + rhs; }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point { Point::new(self.x - rhs.x, self.y - rhs.y) }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) { *self = *self - rhs; }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point { Point::new(self.x * rhs, self.y * rhs) }
}

impl Div<f64> for Point {
    type Output = Point;
    fn div(self, rhs: f64) -> Point { Point::new(self.x / rhs, self.y / rhs) }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point { Point::new(-self.x, -self.y) }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_arithmetic() {
        let a = pt(3, 4);
        let b = pt(1.5, -2);
        assert_eq2!(a + b, pt(4.5, 2));
        assert_eq2!(a - b, pt(1.5, 6));
        assert_eq2!(a * 2.0, pt(6, 8));
        assert_eq2!(a / 2.0, pt(1.5, 2));
        assert_eq2!(-a, pt(-3, -4));
        assert_eq2!(a.dot(pt(1, 0)), 3.0);
    }

    #[test]
    fn test_distance() {
        assert_eq2!(Point::ORIGIN.distance_to(pt(3, 4)), 5.0);
        assert_eq2!(pt(10, 10).distance_to(pt(10, 10)), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq2!(pt(1, 2.5).to_string(), "(1.00, 2.50)");
    }
}
