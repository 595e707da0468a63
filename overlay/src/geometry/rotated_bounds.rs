// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Point, Rotation};

/// Trigonometric noise below this is ignored before taking the ceiling of an extent, so
/// that `ceil(90.00000000000003)` does not grow a 90 unit box to 91.
pub const BOUNDS_EPSILON: f64 = 1e-9;

/// The axis aligned box that exactly contains a `width` × `height` rectangle rotated by
/// `rotation` about its top left corner, plus the translation that moves the rotated
/// content into that box.
///
/// The host sizes its surface to [`Self::width`] × [`Self::height`] and draws the ruler
/// with a rotate-then-translate transform. [`Self::ruler_to_surface`] and
/// [`Self::surface_to_ruler`] convert between the two frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedBounds {
    pub width: f64,
    pub height: f64,
    pub translate: Point,
    pub rotation: Rotation,
}

/// The three values the bounding box depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerGeometry {
    pub width: f64,
    pub height: f64,
    pub rotation: Rotation,
}

impl RulerGeometry {
    #[must_use]
    pub fn new(width: f64, height: f64, rotation: impl Into<Rotation>) -> Self {
        Self {
            width,
            height,
            rotation: rotation.into(),
        }
    }

    #[must_use]
    pub fn bounds(&self) -> RotatedBounds {
        compute_bounds(self.width, self.height, self.rotation)
    }
}

/// Lengths must be finite and non negative. Anything else collapses to `0` so geometry
/// stays total.
#[must_use]
pub fn sanitize_length(it: f64) -> f64 { if it.is_finite() && it > 0.0 { it } else { 0.0 } }

/// The four corners of the rectangle after rotation, in this order: `(0,0)`, `(W,0)`,
/// `(0,H)`, `(W,H)`.
#[must_use]
pub fn rotated_corners(width: f64, height: f64, rotation: Rotation) -> [Point; 4] {
    let (width, height) = (sanitize_length(width), sanitize_length(height));
    [
        Point::ORIGIN,
        rotation.rotate(Point::new(width, 0.0)),
        rotation.rotate(Point::new(0.0, height)),
        rotation.rotate(Point::new(width, height)),
    ]
}

/// Computes the tight bounding box of the rotated ruler. Total for any input.
///
/// ```
/// use r3bl_ruler_overlay::{compute_bounds, pt, Rotation};
/// let bounds = compute_bounds(500.0, 90.0, Rotation::from_degrees(90.0));
/// assert_eq!((bounds.width, bounds.height), (90.0, 500.0));
/// assert_eq!(bounds.translate, pt(90, 0));
/// ```
#[must_use]
pub fn compute_bounds(width: f64, height: f64, rotation: Rotation) -> RotatedBounds {
    let corners = rotated_corners(width, height, rotation);

    let (mut min, mut max) = (corners[0], corners[0]);
    for corner in &corners[1..] {
        min.x = min.x.min(corner.x);
        min.y = min.y.min(corner.y);
        max.x = max.x.max(corner.x);
        max.y = max.y.max(corner.y);
    }

    RotatedBounds {
        width: ceil_extent(max.x - min.x),
        height: ceil_extent(max.y - min.y),
        // `0.0 - x` instead of `-x` keeps an untouched origin at +0.
        translate: Point::new(0.0 - min.x, 0.0 - min.y),
        rotation,
    }
}

fn ceil_extent(extent: f64) -> f64 { (extent - BOUNDS_EPSILON).ceil().max(0.0) }

impl RotatedBounds {
    /// A point in the ruler's local frame (`x` along the ruler) mapped into the surface.
    #[must_use]
    pub fn ruler_to_surface(&self, local: Point) -> Point {
        self.rotation.rotate(local) + self.translate
    }

    /// A point on the surface mapped back into the ruler's local frame.
    #[must_use]
    pub fn surface_to_ruler(&self, surface: Point) -> Point {
        self.rotation.unrotate(surface - self.translate)
    }
}
