// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The persisted ruler settings. The JSON layout (camelCase keys) is shared with older
//! versions of the app, so fields are only ever added, never renamed.
//!
//! ```json
//! {
//!   "position": { "x": 0, "y": 0 },
//!   "size": { "width": 500, "height": 90 },
//!   "rotation": 0.0,
//!   "unit": "pixels",
//!   "opacity": 100,
//!   "color": "white",
//!   "ppi": 96,
//!   "magnifierZoom": 4,
//!   "magnifierEnabled": false,
//!   "edgeSnappingEnabled": false,
//!   "shortcuts": { "reset": "Ctrl+R", "help": "F1" }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_MAGNIFIER_ZOOM, MeasurementUnit, Ppi, RulerColor, ShortcutAction,
            default_shortcuts};

pub const DEFAULT_RULER_WIDTH: i32 = 500;
pub const DEFAULT_RULER_HEIGHT: i32 = 90;
pub const DEFAULT_OPACITY: i32 = 100;
pub const DEFAULT_PPI_SETTING: i32 = 96;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfigPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSize {
    pub width: i32,
    pub height: i32,
}

impl Default for ConfigSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_RULER_WIDTH,
            height: DEFAULT_RULER_HEIGHT,
        }
    }
}

/// Missing keys take their default, so a file written by an older version still loads.
/// Values that are present but unusable are fixed by [`RulerConfig::merge_with_defaults`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RulerConfig {
    pub position: ConfigPosition,
    pub size: ConfigSize,
    pub rotation: f64,
    /// Kept as text, see [`RulerConfig::measurement_unit`].
    pub unit: String,
    /// Percent, `1..=100`.
    pub opacity: i32,
    /// Kept as text, see [`RulerConfig::ruler_color`].
    pub color: String,
    pub ppi: i32,
    pub magnifier_zoom: i32,
    pub magnifier_enabled: bool,
    pub edge_snapping_enabled: bool,
    /// Action name (eg: `"toggleMagnifier"`) to key binding text (eg: `"Ctrl+M"`).
    pub shortcuts: BTreeMap<String, String>,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            position: ConfigPosition::default(),
            size: ConfigSize::default(),
            rotation: 0.0,
            unit: MeasurementUnit::default().to_string(),
            opacity: DEFAULT_OPACITY,
            color: RulerColor::default().to_string(),
            ppi: DEFAULT_PPI_SETTING,
            magnifier_zoom: i32::try_from(DEFAULT_MAGNIFIER_ZOOM).unwrap_or(4),
            magnifier_enabled: false,
            edge_snapping_enabled: false,
            shortcuts: default_shortcuts()
                .into_iter()
                .map(|(action, binding)| (action.to_string(), binding.to_string()))
                .collect(),
        }
    }
}

impl RulerConfig {
    /// Replace unusable values with defaults:
    /// - `opacity`, `ppi` and `magnifierZoom` must be positive.
    /// - `unit` and `color` must not be blank.
    /// - Shortcut actions missing from the file get their default binding.
    #[must_use]
    pub fn merge_with_defaults(self) -> Self {
        let defaults = Self::default();

        let mut shortcuts = self.shortcuts;
        for (action, binding) in defaults.shortcuts {
            shortcuts.entry(action).or_insert(binding);
        }

        Self {
            position: self.position,
            size: self.size,
            rotation: if self.rotation.is_finite() { self.rotation } else { defaults.rotation },
            unit: if self.unit.trim().is_empty() { defaults.unit } else { self.unit },
            opacity: if self.opacity > 0 { self.opacity } else { defaults.opacity },
            color: if self.color.trim().is_empty() { defaults.color } else { self.color },
            ppi: if self.ppi > 0 { self.ppi } else { defaults.ppi },
            magnifier_zoom: if self.magnifier_zoom > 0 {
                self.magnifier_zoom
            } else {
                defaults.magnifier_zoom
            },
            magnifier_enabled: self.magnifier_enabled,
            edge_snapping_enabled: self.edge_snapping_enabled,
            shortcuts,
        }
    }

    /// Unrecognized units read as pixels.
    #[must_use]
    pub fn measurement_unit(&self) -> MeasurementUnit { MeasurementUnit::parse_lenient(&self.unit) }

    /// Unrecognized colors read as white.
    #[must_use]
    pub fn ruler_color(&self) -> RulerColor { RulerColor::parse_lenient(&self.color) }

    #[must_use]
    pub fn ppi(&self) -> Ppi { Ppi::new(f64::from(self.ppi)) }

    /// Binding text configured for `action`, if any.
    #[must_use]
    pub fn shortcut(&self, action: ShortcutAction) -> Option<&str> {
        self.shortcuts.get(action.as_ref()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_default_values() {
        let config = RulerConfig::default();
        assert_eq2!(config.size, ConfigSize { width: 500, height: 90 });
        assert_eq2!(config.unit, "pixels");
        assert_eq2!(config.color, "white");
        assert_eq2!(config.opacity, 100);
        assert_eq2!(config.ppi, 96);
        assert_eq2!(config.magnifier_zoom, 4);
        assert_eq2!(config.shortcut(ShortcutAction::Reset), Some("Ctrl+R"));
        assert_eq2!(config.shortcut(ShortcutAction::Help), Some("F1"));
        assert_eq2!(config.shortcut(ShortcutAction::ClearGuides), Some("Ctrl+G"));
    }

    #[test]
    fn test_camel_case_keys() {
        let json = serde_json::to_value(RulerConfig::default()).unwrap();
        assert_eq2!(json["magnifierZoom"], 4);
        assert_eq2!(json["edgeSnappingEnabled"], false);
        assert_eq2!(json["shortcuts"]["toggleTransparency"], "Ctrl+T");
        assert_eq2!(json["size"]["width"], 500);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: RulerConfig =
            serde_json::from_str(r#"{ "position": { "x": 40, "y": 60 }, "unit": "inches" }"#)
                .unwrap();
        assert_eq2!(config.position, ConfigPosition { x: 40, y: 60 });
        assert_eq2!(config.measurement_unit(), MeasurementUnit::Inches);
        assert_eq2!(config.size, ConfigSize::default());
        assert_eq2!(config.ppi, 96);
    }

    #[test]
    fn test_merge_replaces_unusable_values() {
        let config = RulerConfig {
            opacity: 0,
            ppi: -5,
            magnifier_zoom: 0,
            unit: String::new(),
            color: "  ".into(),
            rotation: f64::NAN,
            shortcuts: BTreeMap::from([("reset".to_string(), "Ctrl+Shift+R".to_string())]),
            ..Default::default()
        }
        .merge_with_defaults();

        assert_eq2!(config.opacity, 100);
        assert_eq2!(config.ppi, 96);
        assert_eq2!(config.magnifier_zoom, 4);
        assert_eq2!(config.unit, "pixels");
        assert_eq2!(config.color, "white");
        assert_eq2!(config.rotation, 0.0);
        // User bindings win, missing ones are filled in.
        assert_eq2!(config.shortcut(ShortcutAction::Reset), Some("Ctrl+Shift+R"));
        assert_eq2!(config.shortcut(ShortcutAction::Quit), Some("Ctrl+Q"));
    }

    #[test]
    fn test_merge_keeps_valid_values() {
        let config = RulerConfig {
            opacity: 40,
            ppi: 141,
            magnifier_zoom: 8,
            unit: "centimeters".into(),
            color: "cyan".into(),
            rotation: 137.5,
            magnifier_enabled: true,
            ..Default::default()
        };
        assert_eq2!(config.clone().merge_with_defaults(), config);
        assert_eq2!(config.ruler_color(), RulerColor::Cyan);
    }
}
