// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Zoomed view of the pixels under the cursor, shown while the cursor hugs a ruler edge.

use std::time::Instant;

use crate::{CaptureRect, CaptureThrottle, InlineString, MeasurementUnit, PhysicalRect,
            PixelBuffer, Point, Ppi, Rotation, ScreenCapture, convert};

pub const MIN_MAGNIFIER_ZOOM: u32 = 2;
pub const MAX_MAGNIFIER_ZOOM: u32 = 16;
pub const DEFAULT_MAGNIFIER_ZOOM: u32 = 4;

/// Side of the (square) magnifier popup.
pub const MAGNIFIER_SIZE: f64 = 200.0;
/// Gap between the popup and the work area edges.
pub const MAGNIFIER_MARGIN: f64 = 10.0;
/// The magnifier shows when the cursor is inside the ruler and this close to an edge.
pub const MAGNIFIER_EDGE_PROXIMITY: f64 = 15.0;

#[must_use]
pub fn clamp_zoom(zoom: i64) -> u32 {
    let clamped = zoom.clamp(i64::from(MIN_MAGNIFIER_ZOOM), i64::from(MAX_MAGNIFIER_ZOOM));
    u32::try_from(clamped).unwrap_or(DEFAULT_MAGNIFIER_ZOOM)
}

/// Square of side `200 / zoom` centred on the cursor, so that once scaled up it fills the
/// popup.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn magnifier_capture_rect(cursor: Point, zoom: u32) -> CaptureRect {
    let zoom = clamp_zoom(i64::from(zoom));
    let side = MAGNIFIER_SIZE as u32 / zoom;
    CaptureRect::new(
        (cursor.x - f64::from(side / 2)) as i32,
        (cursor.y - f64::from(side / 2)) as i32,
        side,
        side,
    )
}

/// Is `local` (ruler coordinates, so rotation is already undone) inside the ruler and
/// within [`MAGNIFIER_EDGE_PROXIMITY`] of one of its four edges?
#[must_use]
pub fn is_near_ruler_edge(local: Point, width: f64, height: f64) -> bool {
    let inside = (0.0..=width).contains(&local.x) && (0.0..=height).contains(&local.y);
    inside
        && (local.x <= MAGNIFIER_EDGE_PROXIMITY
            || local.x >= width - MAGNIFIER_EDGE_PROXIMITY
            || local.y <= MAGNIFIER_EDGE_PROXIMITY
            || local.y >= height - MAGNIFIER_EDGE_PROXIMITY)
}

/// Top left of the popup: the bottom right corner of the work area, unless the cursor is
/// in that quadrant, in which case the bottom left corner.
#[must_use]
pub fn magnifier_placement(cursor: Point, work_area: PhysicalRect) -> Point {
    let center = work_area.center();
    let top = work_area.bottom() - MAGNIFIER_SIZE - MAGNIFIER_MARGIN;
    let left = if cursor.x > center.x && cursor.y > center.y {
        work_area.left + MAGNIFIER_MARGIN
    } else {
        work_area.right() - MAGNIFIER_SIZE - MAGNIFIER_MARGIN
    };
    Point::new(left, top)
}

/// What the host should draw for the magnifier after a cursor move.
#[derive(Debug, Clone, PartialEq)]
pub enum MagnifierView {
    Hidden,
    Shown {
        placement: Point,
        /// Cursor position along the ruler, eg: `"123px"`.
        readout: InlineString,
        zoom: u32,
        /// Draw the zoomed image turned by this much so it lines up with the ruler.
        rotation: Rotation,
    },
}

/// Where the cursor is, in both coordinate systems the magnifier cares about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorContext {
    pub screen: Point,
    pub ruler_local: Point,
    pub ruler_width: f64,
    pub ruler_height: f64,
    pub ruler_rotation: Rotation,
    pub work_area: PhysicalRect,
}

#[derive(Debug)]
pub struct Magnifier<C: ScreenCapture> {
    capture: C,
    throttle: CaptureThrottle,
    zoom: u32,
    frame: Option<PixelBuffer>,
    visible: bool,
}

impl<C: ScreenCapture> Magnifier<C> {
    pub fn new(capture: C, zoom: u32) -> Self {
        Self {
            capture,
            throttle: CaptureThrottle::default(),
            zoom: clamp_zoom(i64::from(zoom)),
            frame: None,
            visible: false,
        }
    }

    pub fn zoom(&self) -> u32 { self.zoom }

    pub fn set_zoom(&mut self, zoom: i64) { self.zoom = clamp_zoom(zoom); }

    pub fn is_visible(&self) -> bool { self.visible }

    /// Last captured and scaled image, if any.
    pub fn frame(&self) -> Option<&PixelBuffer> { self.frame.as_ref() }

    pub fn capture_service(&self) -> &C { &self.capture }

    /// Decide whether to show the popup for this cursor position, and where.
    pub fn track(
        &mut self,
        enabled: bool,
        cursor: CursorContext,
        unit: MeasurementUnit,
        ppi: Ppi,
    ) -> MagnifierView {
        let near_edge =
            is_near_ruler_edge(cursor.ruler_local, cursor.ruler_width, cursor.ruler_height);
        if !(enabled && near_edge) {
            self.hide();
            return MagnifierView::Hidden;
        }

        if !self.visible {
            self.visible = true;
            self.throttle.reset();
        }

        MagnifierView::Shown {
            placement: magnifier_placement(cursor.screen, cursor.work_area),
            readout: convert(cursor.ruler_local.x, unit, ppi).formatted,
            zoom: self.zoom,
            rotation: cursor.ruler_rotation,
        }
    }

    /// Timer tick while visible: grab the area under the cursor (at most once per
    /// throttle interval) and scale it up. Failures keep the previous frame.
    pub fn tick(&mut self, cursor: Point, now: Instant) -> Option<&PixelBuffer> {
        if !self.visible || !self.throttle.check_and_mark(now).may_run() {
            return self.frame.as_ref();
        }

        let rect = magnifier_capture_rect(cursor, self.zoom);
        match self.capture.capture(rect) {
            Ok(buffer) => self.frame = Some(buffer.scaled(self.zoom as usize)),
            Err(report) => {
                // % is Display, ? is Debug.
                tracing::warn!(
                    message = "magnifier capture failed",
                    rect = %rect,
                    error = ?report
                );
            }
        }

        self.frame.as_ref()
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.frame = None;
    }
}
