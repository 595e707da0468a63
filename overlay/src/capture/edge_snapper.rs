// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Instant;

use crate::{CaptureRect, CaptureThrottle, ScreenCapture, SnapPoint, detect_edges,
            nearest_snap};

/// Half the width of the column probed around a ruler edge.
pub const SNAP_PROBE_HALF_WIDTH: i32 = 10;

/// Probes the screen around a ruler edge and snaps the edge to the nearest color
/// boundary. Captures are throttled, and throttled calls reuse the previous result. Any
/// capture failure is logged and treated as "no edges".
#[derive(Debug)]
pub struct EdgeSnapper<C: ScreenCapture> {
    capture: C,
    throttle: CaptureThrottle,
    last_points: Vec<SnapPoint>,
}

impl<C: ScreenCapture> EdgeSnapper<C> {
    pub fn new(capture: C) -> Self {
        Self {
            capture,
            throttle: CaptureThrottle::default(),
            last_points: vec![],
        }
    }

    pub fn capture_service(&self) -> &C { &self.capture }

    /// A column `2 × SNAP_PROBE_HALF_WIDTH` wide, centred on `edge_x`, spanning the
    /// ruler's height.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn probe_rect(edge_x: f64, top: f64, height: f64) -> CaptureRect {
        let height = if height.is_finite() { height.max(0.0).round() } else { 0.0 };
        CaptureRect::new(
            edge_x.round() as i32 - SNAP_PROBE_HALF_WIDTH,
            top.round() as i32,
            (SNAP_PROBE_HALF_WIDTH * 2).unsigned_abs(),
            height as u32,
        )
    }

    /// Edge points near `edge_x`, captured fresh unless the throttle is active.
    pub fn snap_points(&mut self, edge_x: f64, top: f64, height: f64, now: Instant) -> &[SnapPoint] {
        if !self.throttle.check_and_mark(now).may_run() {
            return &self.last_points;
        }

        let rect = Self::probe_rect(edge_x, top, height);
        self.last_points = match self.capture.capture(rect) {
            Ok(buffer) => detect_edges(&buffer, rect.origin()),
            Err(report) => {
                // % is Display, ? is Debug.
                tracing::warn!(
                    message = "edge snapping capture failed",
                    rect = %rect,
                    error = ?report
                );
                vec![]
            }
        };

        &self.last_points
    }

    /// Where `edge_x` should snap to, if there's an edge within tolerance.
    pub fn snap_x(&mut self, edge_x: f64, top: f64, height: f64, now: Instant) -> Option<f64> {
        let points = self.snap_points(edge_x, top, height, now);
        nearest_snap(points, edge_x).map(|it| it.x)
    }

    /// Forget the cached result, eg: after snapping is toggled back on.
    pub fn reset(&mut self) {
        self.throttle.reset();
        self.last_points.clear();
    }
}
