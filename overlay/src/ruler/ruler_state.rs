// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::BTreeMap;

use crate::{ConfigPosition, ConfigSize, DEFAULT_OPACITY, DEFAULT_RULER_HEIGHT,
            DEFAULT_RULER_WIDTH, MIN_RULER_WIDTH, MeasurementUnit, Point, Ppi, RotatedBounds,
            Rotation, RulerColor, RulerConfig, RulerGeometry, clamp_zoom};

/// Arrow key nudges move the ruler this far, or [`NUDGE_STEP_LARGE`] with Shift held.
pub const NUDGE_STEP: f64 = 1.0;
pub const NUDGE_STEP_LARGE: f64 = 10.0;

/// At least this much of the ruler stays on screen after validation.
pub const MIN_VISIBLE_UNITS: f64 = 100.0;

/// Opacity steps cycled through by the transparency shortcut, in percent.
pub const OPACITY_CYCLE: [i32; 5] = [100, 80, 60, 40, 20];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl NudgeDirection {
    #[must_use]
    pub fn offset(self, large: bool) -> Point {
        let step = if large { NUDGE_STEP_LARGE } else { NUDGE_STEP };
        match self {
            NudgeDirection::Left => Point::new(-step, 0.0),
            NudgeDirection::Right => Point::new(step, 0.0),
            NudgeDirection::Up => Point::new(0.0, -step),
            NudgeDirection::Down => Point::new(0.0, step),
        }
    }
}

/// The next opacity in [`OPACITY_CYCLE`]. Values not in the cycle go back to 100.
#[must_use]
pub fn next_opacity(current: i32) -> i32 {
    OPACITY_CYCLE
        .iter()
        .position(|it| *it == current)
        .and_then(|index| OPACITY_CYCLE.get(index + 1))
        .copied()
        .unwrap_or(DEFAULT_OPACITY)
}

/// Everything about the ruler that survives a restart. `position` is the top left corner
/// of the ruler's surface (its rotated bounding box) in logical screen units.
#[derive(Debug, Clone, PartialEq)]
pub struct RulerState {
    pub width: f64,
    pub height: f64,
    pub position: Point,
    pub rotation: Rotation,
    pub unit: MeasurementUnit,
    pub ppi: Ppi,
    /// Percent, `1..=100`.
    pub opacity: i32,
    pub color: RulerColor,
    pub magnifier_zoom: u32,
    pub magnifier_enabled: bool,
    pub edge_snapping_enabled: bool,
    pub shortcuts: BTreeMap<String, String>,
}

impl Default for RulerState {
    fn default() -> Self { Self::from(&RulerConfig::default()) }
}

impl From<&RulerConfig> for RulerState {
    fn from(config: &RulerConfig) -> Self {
        let config = config.clone().merge_with_defaults();
        Self {
            width: sanitize_width(f64::from(config.size.width)),
            height: sanitize_height(f64::from(config.size.height)),
            position: Point::new(f64::from(config.position.x), f64::from(config.position.y)),
            rotation: Rotation::from_degrees(config.rotation),
            unit: config.measurement_unit(),
            ppi: config.ppi(),
            opacity: config.opacity.min(100),
            color: config.ruler_color(),
            magnifier_zoom: clamp_zoom(i64::from(config.magnifier_zoom)),
            magnifier_enabled: config.magnifier_enabled,
            edge_snapping_enabled: config.edge_snapping_enabled,
            shortcuts: config.shortcuts,
        }
    }
}

/// Widths below [`MIN_RULER_WIDTH`] (or not finite) are raised to it.
#[must_use]
pub fn sanitize_width(width: f64) -> f64 {
    if width.is_finite() { width.max(MIN_RULER_WIDTH) } else { f64::from(DEFAULT_RULER_WIDTH) }
}

/// Heights must be positive, anything else is the default height.
#[must_use]
pub fn sanitize_height(height: f64) -> f64 {
    if height.is_finite() && height > 0.0 { height } else { f64::from(DEFAULT_RULER_HEIGHT) }
}

#[allow(clippy::cast_possible_truncation)]
fn round_to_i32(it: f64) -> i32 { it.round() as i32 }

impl RulerState {
    #[must_use]
    pub fn geometry(&self) -> RulerGeometry {
        RulerGeometry::new(self.width, self.height, self.rotation)
    }

    #[must_use]
    pub fn bounds(&self) -> RotatedBounds { self.geometry().bounds() }

    /// The settings file stores whole units, so position and size are rounded here.
    #[must_use]
    pub fn to_config(&self) -> RulerConfig {
        RulerConfig {
            position: ConfigPosition {
                x: round_to_i32(self.position.x),
                y: round_to_i32(self.position.y),
            },
            size: ConfigSize {
                width: round_to_i32(self.width),
                height: round_to_i32(self.height),
            },
            rotation: self.rotation.degrees(),
            unit: self.unit.to_string(),
            opacity: self.opacity,
            color: self.color.to_string(),
            ppi: round_to_i32(self.ppi.value()),
            magnifier_zoom: i32::try_from(self.magnifier_zoom).unwrap_or(i32::MAX),
            magnifier_enabled: self.magnifier_enabled,
            edge_snapping_enabled: self.edge_snapping_enabled,
            shortcuts: self.shortcuts.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{assert_eq2, pt};

    #[test_case(100, 80)]
    #[test_case(80, 60)]
    #[test_case(60, 40)]
    #[test_case(40, 20)]
    #[test_case(20, 100)]
    #[test_case(55, 100)]
    fn test_next_opacity(current: i32, expected: i32) {
        assert_eq2!(next_opacity(current), expected);
    }

    #[test]
    fn test_nudge_offsets() {
        assert_eq2!(NudgeDirection::Left.offset(false), pt(-1, 0));
        assert_eq2!(NudgeDirection::Down.offset(true), pt(0, 10));
    }

    #[test]
    fn test_from_config() {
        let config = RulerConfig {
            position: ConfigPosition { x: 40, y: -20 },
            size: ConfigSize {
                width: 20,
                height: 0,
            },
            rotation: 137.5,
            unit: "Centimeters".into(),
            color: "black".into(),
            magnifier_zoom: 64,
            ..Default::default()
        };
        let state = RulerState::from(&config);
        assert_eq2!(state.position, pt(40, -20));
        assert_eq2!(state.width, MIN_RULER_WIDTH);
        assert_eq2!(state.height, 90.0);
        assert_eq2!(state.rotation.degrees(), 137.5);
        assert_eq2!(state.unit, MeasurementUnit::Centimeters);
        assert_eq2!(state.color, RulerColor::Black);
        assert_eq2!(state.magnifier_zoom, 16);
    }

    #[test]
    fn test_to_config_rounds() {
        let state = RulerState {
            position: pt(10.6, -3.2),
            width: 333.0,
            unit: MeasurementUnit::Inches,
            ..Default::default()
        };
        let config = state.to_config();
        assert_eq2!(config.position, ConfigPosition { x: 11, y: -3 });
        assert_eq2!(config.size.width, 333);
        assert_eq2!(config.unit, "inches");
        assert_eq2!(RulerState::from(&config).unit, MeasurementUnit::Inches);
    }
}
