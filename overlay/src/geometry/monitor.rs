// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Point;

/// A monitor rectangle. [`MonitorRect::bounds`] and [`MonitorRect::work_area`] are in
/// physical pixels, as reported by the platform, and [`MonitorRect::scale`] is the
/// display scale (`1.0` at 96 DPI, `1.5` at 144 DPI, ...).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorRect {
    pub bounds: PhysicalRect,
    /// Bounds minus task bars and docks.
    pub work_area: PhysicalRect,
    pub scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhysicalRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PhysicalRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 { self.left + self.width }

    #[must_use]
    pub fn bottom(&self) -> f64 { self.top + self.height }

    /// Left and top edges are inclusive, right and bottom exclusive.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x < self.right()
            && point.y >= self.top
            && point.y < self.bottom()
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

impl MonitorRect {
    /// A monitor without task bars at the given scale.
    #[must_use]
    pub fn new(bounds: PhysicalRect, scale: f64) -> Self {
        Self {
            bounds,
            work_area: bounds,
            scale: sanitize_scale(scale),
        }
    }

    #[must_use]
    pub fn with_work_area(mut self, work_area: PhysicalRect) -> Self {
        self.work_area = work_area;
        self
    }

    /// Top left corner of the monitor in logical units.
    #[must_use]
    pub fn logical_origin(&self) -> Point {
        Point::new(self.bounds.left, self.bounds.top) / self.scale
    }

    /// Whole monitor in logical units.
    #[must_use]
    pub fn logical_bounds(&self) -> PhysicalRect {
        let origin = self.logical_origin();
        PhysicalRect::new(
            origin.x,
            origin.y,
            self.bounds.width / self.scale,
            self.bounds.height / self.scale,
        )
    }

    /// Work area in logical units.
    #[must_use]
    pub fn logical_work_area(&self) -> PhysicalRect {
        PhysicalRect::new(
            self.work_area.left / self.scale,
            self.work_area.top / self.scale,
            self.work_area.width / self.scale,
            self.work_area.height / self.scale,
        )
    }
}

/// Display scales must be finite and positive, anything else is `1.0`.
#[must_use]
pub fn sanitize_scale(scale: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 { scale } else { 1.0 }
}

/// The monitor whose physical bounds contain `physical_point`, falling back to the first
/// monitor (the primary one) when the point is off every screen. Returns [`None`] only
/// when `monitors` is empty.
#[must_use]
pub fn monitor_containing(
    physical_point: Point,
    monitors: &[MonitorRect],
) -> Option<MonitorRect> {
    monitors
        .iter()
        .find(|it| it.bounds.contains(physical_point))
        .or_else(|| monitors.first())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, pt};

    fn two_monitors() -> [MonitorRect; 2] {
        [
            MonitorRect::new(PhysicalRect::new(0.0, 0.0, 1920.0, 1080.0), 1.0),
            MonitorRect::new(PhysicalRect::new(1920.0, 0.0, 2560.0, 1440.0), 1.5),
        ]
    }

    #[test]
    fn test_monitor_containing() {
        let monitors = two_monitors();
        assert_eq2!(monitor_containing(pt(100, 100), &monitors), Some(monitors[0]));
        assert_eq2!(monitor_containing(pt(1920, 10), &monitors), Some(monitors[1]));
        // Off screen falls back to the primary.
        assert_eq2!(monitor_containing(pt(-50, -50), &monitors), Some(monitors[0]));
        assert_eq2!(monitor_containing(pt(0, 0), &[]), None);
    }

    #[test]
    fn test_logical_origin_uses_scale() {
        let monitors = two_monitors();
        assert_eq2!(monitors[1].logical_origin(), pt(1280, 0));
    }

    #[test]
    fn test_logical_bounds() {
        let monitors = two_monitors();
        assert_eq2!(
            monitors[1].logical_bounds(),
            PhysicalRect::new(1280.0, 0.0, 2560.0 / 1.5, 960.0)
        );
    }

    #[test]
    fn test_bad_scale_is_one() {
        let monitor = MonitorRect::new(PhysicalRect::default(), 0.0);
        assert_eq2!(monitor.scale, 1.0);
    }
}
