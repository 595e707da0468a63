// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Anchor preserving edge resize for a rotated ruler.
//!
//! Resizing a rotated ruler by moving and resizing its window on every mouse move makes
//! the compositor flash stale content at the new window position. Instead, the surface
//! is expanded once to cover the whole monitor, every move only changes the content
//! translation and ruler width, and the surface shrinks back to the exact bounding box
//! when the drag ends. The edge opposite the one being dragged (the anchor) never moves
//! on screen.
//!
//! The gesture is a small state machine, which makes the required ordering explicit:
//!
//! ```text
//!  begin() ──► AwaitingExpand ──on_render_pass()──► Expanded ──update()*──► end()
//!    │              │                                                        ▲
//!    │ hide content └──────────────── end() (abandoned) ─────────────────────┘
//! ```
//!
//! 1. [`ResizeSession::begin`]: record the anchor and the monitor. The host hides the
//!    ruler content ([`ResizeSession::is_content_visible`] is `false`).
//! 2. The host lets one render pass happen with the content hidden, then calls
//!    [`ResizeSession::on_render_pass`], which returns the [`ExpandSurface`] command.
//!    Content becomes visible only after the expansion is applied.
//! 3. [`ResizeSession::update`] on each mouse move returns the new width and
//!    translation.
//! 4. [`ResizeSession::end`] returns the final width and screen position (or
//!    [`ResizeOutcome::Abandoned`] if the mouse was released before expansion).

use strum_macros::Display;

use crate::{MonitorRect, PhysicalRect, Point, RotatedBounds, Rotation, RulerGeometry,
            compute_bounds};

/// The ruler can never be resized below this many logical units.
pub const MIN_RULER_WIDTH: f64 = 100.0;

/// Which end of the ruler is being dragged. [`ResizeEdge::Start`] is the `x = 0` end
/// (the left handle of an unrotated ruler), [`ResizeEdge::End`] is the `x = width` end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ResizeEdge {
    #[strum(serialize = "start")]
    Start,
    #[strum(serialize = "end")]
    End,
}

impl ResizeEdge {
    /// The point, in the ruler's local frame, that stays fixed while this edge is
    /// dragged: the opposite end of the ruler.
    #[must_use]
    pub fn anchor_in_ruler(self, width: f64) -> Point {
        match self {
            ResizeEdge::Start => Point::new(width, 0.0),
            ResizeEdge::End => Point::ORIGIN,
        }
    }
}

/// Where the ruler surface is on screen right now: the window's top left corner and
/// the translation applied to the rotated content inside it. Both in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfacePlacement {
    pub origin: Point,
    pub translate: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ResizePhase {
    /// Content is hidden, waiting for a render pass before the surface expands.
    AwaitingExpand,
    /// Surface covers the monitor, content visible, moves are applied.
    Expanded,
}

/// Command for the host: move and size the surface to `physical_bounds` and set the
/// content translation to `translate`, then show the content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpandSurface {
    pub physical_bounds: PhysicalRect,
    pub logical_origin: Point,
    pub translate: Point,
}

/// Result of one pointer move while expanded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeUpdate {
    pub width: f64,
    pub translate: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeOutcome {
    /// Released before the surface expanded. Show the content again and change nothing.
    Abandoned,
    /// Shrink the surface to `bounds` and move it to `position`.
    Completed {
        width: f64,
        position: Point,
        bounds: RotatedBounds,
    },
}

/// One resize gesture. See the [module docs](self) for the protocol.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    edge: ResizeEdge,
    phase: ResizePhase,
    rotation: Rotation,
    height: f64,
    initial_width: f64,
    width: f64,
    /// Physical pixels.
    start_screen_point: Point,
    monitor: MonitorRect,
    /// Fixed screen position (logical) of the end that is not being dragged.
    anchor: Point,
    /// Translation to use once expanded, computed at begin while the surface is still
    /// at its original position.
    expanded_translate: Point,
    translate: Point,
}

impl ResizeSession {
    /// Start a resize gesture. `start_screen_point` is the pointer position in physical
    /// pixels, `monitor` is the monitor containing the surface origin (see
    /// [`crate::monitor_containing`]).
    #[must_use]
    pub fn begin(
        edge: ResizeEdge,
        start_screen_point: Point,
        geometry: RulerGeometry,
        placement: SurfacePlacement,
        monitor: MonitorRect,
    ) -> Self {
        let rotation = geometry.rotation;
        let width = geometry.width.max(MIN_RULER_WIDTH);

        let anchor = placement.origin
            + placement.translate
            + rotation.rotate(edge.anchor_in_ruler(width));

        let expanded_translate =
            placement.translate + (placement.origin - monitor.logical_origin());

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "begin resize",
            edge = %edge,
            anchor = %anchor,
            width = %width,
            rotation = %rotation
        );

        Self {
            edge,
            phase: ResizePhase::AwaitingExpand,
            rotation,
            height: geometry.height,
            initial_width: width,
            width,
            start_screen_point,
            monitor,
            anchor,
            expanded_translate,
            translate: placement.translate,
        }
    }

    #[must_use]
    pub fn edge(&self) -> ResizeEdge { self.edge }

    #[must_use]
    pub fn phase(&self) -> ResizePhase { self.phase }

    #[must_use]
    pub fn anchor(&self) -> Point { self.anchor }

    #[must_use]
    pub fn width(&self) -> f64 { self.width }

    #[must_use]
    pub fn translate(&self) -> Point { self.translate }

    #[must_use]
    pub fn monitor(&self) -> MonitorRect { self.monitor }

    /// Content stays hidden until the surface has expanded.
    #[must_use]
    pub fn is_content_visible(&self) -> bool { self.phase == ResizePhase::Expanded }

    /// Call once the host has rendered a frame with the content hidden. Returns the
    /// expansion command the first time, [`None`] afterwards.
    pub fn on_render_pass(&mut self) -> Option<ExpandSurface> {
        match self.phase {
            ResizePhase::AwaitingExpand => {
                self.phase = ResizePhase::Expanded;
                self.translate = self.expanded_translate;

                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "resize surface expanded",
                    monitor = ?self.monitor.bounds,
                    translate = %self.translate
                );

                Some(ExpandSurface {
                    physical_bounds: self.monitor.bounds,
                    logical_origin: self.monitor.logical_origin(),
                    translate: self.translate,
                })
            }
            ResizePhase::Expanded => None,
        }
    }

    /// Apply a pointer move. `current_screen_point` is in physical pixels. Moves that
    /// arrive before expansion (or carry non finite coordinates) are ignored.
    pub fn update(&mut self, current_screen_point: Point) -> Option<ResizeUpdate> {
        if self.phase != ResizePhase::Expanded || !current_screen_point.is_finite() {
            return None;
        }

        let delta = (current_screen_point - self.start_screen_point) / self.monitor.scale;
        let along_axis = delta.dot(self.rotation.axis());

        let width = match self.edge {
            ResizeEdge::Start => self.initial_width - along_axis,
            ResizeEdge::End => self.initial_width + along_axis,
        }
        .max(MIN_RULER_WIDTH)
        .trunc();

        self.width = width;
        self.translate = self.translate_keeping_anchor(width);

        Some(ResizeUpdate {
            width,
            translate: self.translate,
        })
    }

    /// Finish the gesture.
    #[must_use]
    pub fn end(self) -> ResizeOutcome {
        if self.phase == ResizePhase::AwaitingExpand {
            tracing::debug!(message = "resize abandoned before expansion");
            return ResizeOutcome::Abandoned;
        }

        let bounds = compute_bounds(self.width, self.height, self.rotation);
        let position = self.anchor
            - (self.rotation.rotate(self.edge.anchor_in_ruler(self.width))
                + bounds.translate);

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "end resize",
            width = %self.width,
            position = %position
        );

        ResizeOutcome::Completed {
            width: self.width,
            position,
            bounds,
        }
    }

    /// Translation (inside the expanded surface) that puts the anchor end of a ruler of
    /// `width` at [`Self::anchor`].
    fn translate_keeping_anchor(&self, width: f64) -> Point {
        self.anchor
            - self.monitor.logical_origin()
            - self.rotation.rotate(self.edge.anchor_in_ruler(width))
    }
}
