// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Finds vertical color edges (eg: a window border) in a captured strip of screen so the
//! ruler can snap to them.

use crate::{PixelBuffer, Point};

/// Two horizontally adjacent pixels further apart than this (in RGB space) form an edge.
pub const COLOR_THRESHOLD: f64 = 30.0;

/// An edge is only snapped to when it is within this many pixels of the target.
pub const SNAP_TOLERANCE: f64 = 5.0;

/// Screen position of a detected edge pixel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SnapPoint {
    pub x: f64,
    pub y: f64,
}

impl From<SnapPoint> for Point {
    fn from(it: SnapPoint) -> Self { Point::new(it.x, it.y) }
}

/// Scans every row left to right and records a [`SnapPoint`] at the second pixel of each
/// adjacent pair whose color distance exceeds [`COLOR_THRESHOLD`]. `origin` is where the
/// buffer's top left pixel sits on screen. Results are in row major order.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn detect_edges(buffer: &PixelBuffer, origin: Point) -> Vec<SnapPoint> {
    let mut acc = vec![];

    for row in 0..buffer.height() {
        let mut previous = buffer.pixel(0, row);
        for col in 1..buffer.width() {
            let current = buffer.pixel(col, row);
            if let (Some(left), Some(right)) = (previous, current)
                && left.color_distance(right) > COLOR_THRESHOLD
            {
                acc.push(SnapPoint {
                    x: origin.x + col as f64,
                    y: origin.y + row as f64,
                });
            }
            previous = current;
        }
    }

    acc
}

/// The point whose `x` is closest to `target_x`, if it's within [`SNAP_TOLERANCE`]. Ties
/// go to the earliest point.
#[must_use]
pub fn nearest_snap(points: &[SnapPoint], target_x: f64) -> Option<SnapPoint> {
    let mut closest: Option<(SnapPoint, f64)> = None;

    for point in points {
        let distance = (point.x - target_x).abs();
        if distance > SNAP_TOLERANCE {
            continue;
        }
        match closest {
            Some((_, best)) if distance >= best => {}
            _ => closest = Some((*point, distance)),
        }
    }

    closest.map(|(point, _)| point)
}
