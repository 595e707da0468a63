// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`RulerController`] owns the [`RulerState`] and is the only thing that changes it.
//!
//! Every mutation funnels through one path: change the state, recompute the derived
//! [`RulerFrame`] (bounds, tick marks, resize cursor), then save the settings. The host
//! never has to remember which derived value depends on which setting; it just redraws
//! from [`RulerController::frame`] after calling any operation.

use std::time::Instant;

use crate::{ClipboardService, ConfigStore, CursorContext, DEFAULT_RULER_HEIGHT,
            DEFAULT_RULER_WIDTH, EdgeGuides, EdgeSnapper, ExpandSurface, GuideToggle,
            InlineString, KeyBinding, MIN_VISIBLE_UNITS, MeasurementConverter,
            MeasurementUnit, MonitorRect, NudgeDirection, PhysicalRect, Point,
            PointToPoint, Ppi, ResizeCursor, ResizeEdge, ResizeOutcome, ResizePhase,
            ResizeSession, ResizeUpdate, RotatedBounds, Rotation, RulerColor, RulerMarkings,
            RulerState, ScreenCapture, ShortcutAction, SurfacePlacement, clamp_zoom,
            compute_bounds, format_spaced, generate_ticks, inline_string, monitor_containing,
            next_opacity, sanitize_height, sanitize_width};

/// Where and how big the host's surface should be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceLayout {
    /// The surface is exactly the ruler's bounding box, with its top left at `position`.
    Fitted {
        position: Point,
        bounds: RotatedBounds,
    },
    /// Mid resize: the surface covers a whole monitor.
    Expanded(ExpandSurface),
}

/// Everything the host needs to draw the ruler.
#[derive(Debug, Clone, PartialEq)]
pub struct RulerFrame {
    pub layout: SurfaceLayout,
    /// `false` between the start of a resize and the surface expansion.
    pub content_visible: bool,
    pub markings: RulerMarkings,
    pub cursor: ResizeCursor,
    /// `0.0..=1.0`.
    pub opacity: f64,
    pub color: RulerColor,
}

impl RulerFrame {
    fn compute(state: &RulerState, resize: Option<&ResizeSession>) -> Self {
        let width = resize.map_or(state.width, ResizeSession::width);
        let bounds = compute_bounds(width, state.height, state.rotation);

        let layout = match resize {
            Some(session) if session.phase() == ResizePhase::Expanded => {
                let monitor = session.monitor();
                SurfaceLayout::Expanded(ExpandSurface {
                    physical_bounds: monitor.bounds,
                    logical_origin: monitor.logical_origin(),
                    translate: session.translate(),
                })
            }
            _ => SurfaceLayout::Fitted {
                position: state.position,
                bounds,
            },
        };

        Self {
            layout,
            content_visible: resize.is_none_or(ResizeSession::is_content_visible),
            markings: generate_ticks(width, state.height, state.unit, state.ppi, state.rotation),
            cursor: ResizeCursor::from(state.rotation),
            opacity: f64::from(state.opacity) / 100.0,
            color: state.color,
        }
    }
}

/// What a shortcut did, for the parts the host has to carry out itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutOutcome {
    /// Fully handled, just redraw.
    Handled,
    /// Show this toast, eg: `"Copied: 500 px"`.
    Copied { toast: InlineString },
    CopyFailed,
    OpenPointToPoint,
    ShowHelp,
    Quit,
}

#[derive(Debug)]
pub struct RulerController<S: ConfigStore> {
    store: S,
    state: RulerState,
    guides: EdgeGuides,
    resize: Option<ResizeSession>,
    frame: RulerFrame,
}

impl<S: ConfigStore> RulerController<S> {
    /// Load settings from `store`. Nothing is saved until the first change.
    pub fn new(mut store: S) -> Self {
        let state = RulerState::from(&store.load());
        let frame = RulerFrame::compute(&state, None);
        Self {
            store,
            state,
            guides: EdgeGuides::default(),
            resize: None,
            frame,
        }
    }

    pub fn state(&self) -> &RulerState { &self.state }

    pub fn frame(&self) -> &RulerFrame { &self.frame }

    pub fn guides(&self) -> &EdgeGuides { &self.guides }

    pub fn store(&self) -> &S { &self.store }

    pub fn is_resizing(&self) -> bool { self.resize.is_some() }

    fn recompute(&mut self) { self.frame = RulerFrame::compute(&self.state, self.resize.as_ref()); }

    /// Save failures are logged and swallowed, so a gesture is never interrupted by a
    /// read only config folder.
    fn on_state_changed(&mut self) {
        self.recompute();

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "ruler state changed",
            width = %self.state.width,
            height = %self.state.height,
            position = %self.state.position,
            rotation = %self.state.rotation,
            unit = %self.state.unit
        );

        if let Err(report) = self.store.save(&self.state.to_config()) {
            // % is Display, ? is Debug.
            tracing::warn!(message = "Could not save ruler settings.", error = ?report);
        }
    }

    pub fn set_width(&mut self, width: f64) {
        self.state.width = sanitize_width(width);
        self.on_state_changed();
    }

    pub fn set_height(&mut self, height: f64) {
        self.state.height = sanitize_height(height);
        self.on_state_changed();
    }

    pub fn set_rotation(&mut self, rotation: impl Into<Rotation>) {
        self.state.rotation = rotation.into();
        self.on_state_changed();
    }

    /// Rotate another 90 degrees clockwise, wrapping at 360.
    pub fn quick_rotate(&mut self) {
        self.state.rotation = self.state.rotation.quick_rotated();
        self.on_state_changed();
    }

    pub fn set_unit(&mut self, unit: MeasurementUnit) {
        self.state.unit = unit;
        self.on_state_changed();
    }

    pub fn set_ppi(&mut self, ppi: impl Into<Ppi>) {
        self.state.ppi = ppi.into();
        self.on_state_changed();
    }

    /// Non finite coordinates are ignored.
    pub fn set_position(&mut self, position: Point) {
        if !position.is_finite() {
            return;
        }
        self.state.position = position;
        self.on_state_changed();
    }

    pub fn move_by(&mut self, offset: Point) { self.set_position(self.state.position + offset); }

    /// Arrow key nudge: 1 unit, or 10 with Shift.
    pub fn nudge(&mut self, direction: NudgeDirection, large: bool) {
        self.move_by(direction.offset(large));
    }

    /// Clamped to `1..=100` percent.
    pub fn set_opacity(&mut self, opacity: i32) {
        self.state.opacity = opacity.clamp(1, 100);
        self.on_state_changed();
    }

    pub fn cycle_opacity(&mut self) { self.set_opacity(next_opacity(self.state.opacity)); }

    pub fn set_color(&mut self, color: RulerColor) {
        self.state.color = color;
        self.on_state_changed();
    }

    pub fn toggle_magnifier(&mut self) {
        self.state.magnifier_enabled = !self.state.magnifier_enabled;
        self.on_state_changed();
    }

    pub fn toggle_edge_snapping(&mut self) {
        self.state.edge_snapping_enabled = !self.state.edge_snapping_enabled;
        self.on_state_changed();
    }

    pub fn set_magnifier_zoom(&mut self, zoom: i64) {
        self.state.magnifier_zoom = clamp_zoom(zoom);
        self.on_state_changed();
    }

    /// Back to an unrotated 500 × 90 ruler centred on `primary`.
    pub fn reset_position(&mut self, primary: &MonitorRect) {
        let screen = primary.logical_bounds();
        let width = f64::from(DEFAULT_RULER_WIDTH);
        let height = f64::from(DEFAULT_RULER_HEIGHT);

        self.state.rotation = Rotation::default();
        self.state.width = width;
        self.state.height = height;
        self.state.position = Point::new(
            screen.left + ((screen.width - width) / 2.0).trunc(),
            screen.top + ((screen.height - height) / 2.0).trunc(),
        );
        self.on_state_changed();
    }

    /// Pull the ruler back so at least [`MIN_VISIBLE_UNITS`] of it stay on `primary`.
    /// Only saves when something moved.
    pub fn validate_position(&mut self, primary: &MonitorRect) {
        let clamped = clamp_visible(
            self.state.position,
            self.state.bounds(),
            primary.logical_bounds(),
        );
        if clamped != self.state.position {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "ruler was off screen",
                from = %self.state.position,
                to = %clamped
            );
            self.set_position(clamped);
        }
    }

    /// Shift+click on the ruler at local `x`.
    pub fn toggle_guide_at(&mut self, x: f64) -> GuideToggle { self.guides.toggle_at(x) }

    pub fn clear_guides(&mut self) { self.guides.clear(); }

    /// The ruler's length in its current unit, spaced, eg: `"500 px"`.
    pub fn measurement_text(&self) -> InlineString {
        let converter = MeasurementConverter::new(self.state.ppi);
        format_spaced(
            converter.pixels_to(self.state.unit, self.state.width),
            self.state.unit,
        )
    }

    /// Put [`Self::measurement_text`] on the clipboard. Returns the toast text on success.
    pub fn copy_measurement(
        &self,
        clipboard: &mut impl ClipboardService,
    ) -> Option<InlineString> {
        let text = self.measurement_text();
        match clipboard.try_to_put_content_into_clipboard(text.to_string()) {
            Ok(()) => Some(inline_string!("Copied: {text}")),
            Err(error) => {
                // % is Display, ? is Debug.
                tracing::warn!(message = "Could not copy measurement.", error = %error);
                None
            }
        }
    }

    /// A fresh point to point measurement in the ruler's unit and PPI.
    pub fn point_to_point(&self) -> PointToPoint { PointToPoint::new(self.state.unit, self.state.ppi) }

    /// Cursor position mapped into the ruler's local frame, for the magnifier.
    pub fn cursor_context(&self, screen: Point, work_area: PhysicalRect) -> CursorContext {
        let bounds = self.state.bounds();
        CursorContext {
            screen,
            ruler_local: bounds.surface_to_ruler(screen - self.state.position),
            ruler_width: self.state.width,
            ruler_height: self.state.height,
            ruler_rotation: self.state.rotation,
            work_area,
        }
    }

    /// After a drag, move the ruler so its start edge lines up with a color edge under
    /// it. Only unrotated rulers snap, since only then is that edge vertical on screen.
    /// Returns the horizontal shift applied.
    pub fn snap_to_edges<C: ScreenCapture>(
        &mut self,
        snapper: &mut EdgeSnapper<C>,
        now: Instant,
    ) -> Option<f64> {
        if !self.state.edge_snapping_enabled || !self.state.rotation.is_unrotated() {
            return None;
        }

        let Point { x: left, y: top } = self.state.position;
        let shift = snapper.snap_x(left, top, self.state.height, now)? - left;
        if shift.abs() < f64::EPSILON {
            return None;
        }

        self.move_by(Point::new(shift, 0.0));
        Some(shift)
    }

    /// Start dragging a resize handle. `start_screen_point` is the pointer in physical
    /// pixels; the monitor containing it (or the primary) hosts the expanded surface.
    /// Returns `false` if a resize is already running or there are no monitors.
    pub fn begin_resize(
        &mut self,
        edge: ResizeEdge,
        start_screen_point: Point,
        monitors: &[MonitorRect],
    ) -> bool {
        if self.resize.is_some() {
            return false;
        }
        let Some(monitor) = monitor_containing(start_screen_point, monitors) else {
            return false;
        };

        let placement = SurfacePlacement {
            origin: self.state.position,
            translate: self.state.bounds().translate,
        };
        self.resize = Some(ResizeSession::begin(
            edge,
            start_screen_point,
            self.state.geometry(),
            placement,
            monitor,
        ));
        self.recompute();
        true
    }

    /// See [`ResizeSession::on_render_pass`].
    pub fn resize_render_pass(&mut self) -> Option<ExpandSurface> {
        let expand = self.resize.as_mut()?.on_render_pass();
        self.recompute();
        expand
    }

    /// Pointer moved while resizing. The width is live in [`Self::frame`] but is only
    /// saved when the resize ends.
    pub fn update_resize(&mut self, current_screen_point: Point) -> Option<ResizeUpdate> {
        let update = self.resize.as_mut()?.update(current_screen_point);
        if update.is_some() {
            self.recompute();
        }
        update
    }

    /// Pointer released. Commits the new width and position, or restores the ruler if
    /// the surface never expanded. [`None`] if no resize was running.
    pub fn end_resize(&mut self) -> Option<ResizeOutcome> {
        let outcome = self.resize.take()?.end();
        match outcome {
            ResizeOutcome::Abandoned => self.recompute(),
            ResizeOutcome::Completed {
                width, position, ..
            } => {
                self.state.width = width;
                self.state.position = position;
                self.on_state_changed();
            }
        }
        Some(outcome)
    }

    /// Run a shortcut action. `primary` is needed by [`ShortcutAction::Reset`].
    pub fn handle_shortcut(
        &mut self,
        action: ShortcutAction,
        clipboard: &mut impl ClipboardService,
        primary: &MonitorRect,
    ) -> ShortcutOutcome {
        // % is Display, ? is Debug.
        tracing::debug!(message = "shortcut", action = %action);

        match action {
            ShortcutAction::Reset => {
                self.reset_position(primary);
                ShortcutOutcome::Handled
            }
            ShortcutAction::Copy => match self.copy_measurement(clipboard) {
                Some(toast) => ShortcutOutcome::Copied { toast },
                None => ShortcutOutcome::CopyFailed,
            },
            ShortcutAction::ToggleTransparency => {
                self.cycle_opacity();
                ShortcutOutcome::Handled
            }
            ShortcutAction::ToggleMagnifier => {
                self.toggle_magnifier();
                ShortcutOutcome::Handled
            }
            ShortcutAction::ToggleSnapping => {
                self.toggle_edge_snapping();
                ShortcutOutcome::Handled
            }
            ShortcutAction::ClearGuides => {
                self.clear_guides();
                ShortcutOutcome::Handled
            }
            ShortcutAction::PointToPoint => ShortcutOutcome::OpenPointToPoint,
            ShortcutAction::Help => ShortcutOutcome::ShowHelp,
            ShortcutAction::Quit => ShortcutOutcome::Quit,
        }
    }

    /// A key pressed while the ruler has focus. Configured shortcuts come first, then
    /// arrow key nudges. [`None`] if the key means nothing to the ruler.
    pub fn handle_key(
        &mut self,
        key: &KeyBinding,
        clipboard: &mut impl ClipboardService,
        primary: &MonitorRect,
    ) -> Option<ShortcutOutcome> {
        let action = self.state.shortcuts.iter().find_map(|(action, binding)| {
            let binding = binding.parse::<KeyBinding>().ok()?;
            (binding == *key)
                .then(|| action.parse::<ShortcutAction>().ok())
                .flatten()
        });
        if let Some(action) = action {
            return Some(self.handle_shortcut(action, clipboard, primary));
        }

        let direction = match key.key.as_str() {
            "Left" => NudgeDirection::Left,
            "Right" => NudgeDirection::Right,
            "Up" => NudgeDirection::Up,
            "Down" => NudgeDirection::Down,
            _ => return None,
        };
        // Only Shift picks the step, other modifiers ride along.
        self.nudge(direction, key.modifiers.shift);
        Some(ShortcutOutcome::Handled)
    }
}

/// `position` adjusted so that at least [`MIN_VISIBLE_UNITS`] of a surface of `bounds`
/// size overlap `screen` on each axis.
#[must_use]
pub fn clamp_visible(position: Point, bounds: RotatedBounds, screen: PhysicalRect) -> Point {
    let clamp_axis = |value: f64, size: f64, start: f64, end: f64| {
        if value + size < start + MIN_VISIBLE_UNITS {
            start + MIN_VISIBLE_UNITS - size
        } else if value > end - MIN_VISIBLE_UNITS {
            end - MIN_VISIBLE_UNITS
        } else {
            value
        }
    };
    Point::new(
        clamp_axis(position.x, bounds.width, screen.left, screen.right()),
        clamp_axis(position.y, bounds.height, screen.top, screen.bottom()),
    )
}
