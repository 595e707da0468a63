// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use miette::IntoDiagnostic;
use r3bl_ruler_overlay::{CommonResult, MeasurementUnit, RulerConfig};
use serde::Serialize;

/// One row of `ruler ticks` output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickRow {
    pub position: f64,
    pub kind: String,
    /// Tick length in units, for the given ruler height.
    pub length: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// What a command produced. [`Display`] is the human readable form, [`RulerReport::to_json`]
/// the machine readable one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum RulerReport {
    #[serde(rename_all = "camelCase")]
    Bounds {
        width: f64,
        height: f64,
        translate_x: f64,
        translate_y: f64,
        cursor: String,
    },
    #[serde(rename_all = "camelCase")]
    Ticks {
        unit: MeasurementUnit,
        ticks: Vec<TickRow>,
        summary: String,
    },
    /// Shared by `convert` and `distance`.
    #[serde(rename_all = "camelCase")]
    Measurement {
        pixels: f64,
        value: f64,
        unit: MeasurementUnit,
        formatted: String,
    },
    #[serde(rename_all = "camelCase")]
    Calibrate { diagonal: f64, ppi: u32 },
    #[serde(rename_all = "camelCase")]
    Resize {
        width: f64,
        x: f64,
        y: f64,
        surface_width: f64,
        surface_height: f64,
    },
    #[serde(rename_all = "camelCase")]
    ConfigShow {
        path: String,
        /// `false` when there is no settings file yet and defaults are shown.
        exists: bool,
        config: RulerConfig,
    },
    #[serde(rename_all = "camelCase")]
    ConfigPath { path: String },
}

impl RulerReport {
    /// # Errors
    ///
    /// If serialization fails, which only happens for non string map keys.
    pub fn to_json(&self) -> CommonResult<String> {
        serde_json::to_string_pretty(self).into_diagnostic()
    }
}

impl Display for RulerReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            RulerReport::Bounds {
                width,
                height,
                translate_x,
                translate_y,
                cursor,
            } => {
                writeln!(f, "surface:   {width} x {height}")?;
                writeln!(f, "translate: ({translate_x}, {translate_y})")?;
                write!(f, "cursor:    {cursor}")
            }
            RulerReport::Ticks {
                ticks, summary, ..
            } => {
                for tick in ticks {
                    write!(f, "{:>10.2}  {:<8} {:>6.1}", tick.position, tick.kind, tick.length)?;
                    if let Some(label) = &tick.label {
                        write!(f, "  {label}")?;
                    }
                    writeln!(f)?;
                }
                write!(f, "total: {summary}")
            }
            RulerReport::Measurement { formatted, .. } => write!(f, "{formatted}"),
            RulerReport::Calibrate { diagonal, ppi } => {
                write!(f, "{diagonal}\" display: {ppi} PPI")
            }
            RulerReport::Resize {
                width,
                x,
                y,
                surface_width,
                surface_height,
            } => {
                writeln!(f, "width:    {width}")?;
                writeln!(f, "position: ({x}, {y})")?;
                write!(f, "surface:  {surface_width} x {surface_height}")
            }
            RulerReport::ConfigShow {
                path,
                exists,
                config,
            } => {
                if *exists {
                    writeln!(f, "# {path}")?;
                } else {
                    writeln!(f, "# {path} (not created yet, showing defaults)")?;
                }
                let json = serde_json::to_string_pretty(config).map_err(|_| std::fmt::Error)?;
                write!(f, "{json}")
            }
            RulerReport::ConfigPath { path } => write!(f, "{path}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use r3bl_ruler_overlay::assert_eq2;

    use super::*;

    #[test]
    fn test_json_is_tagged() {
        let report = RulerReport::Calibrate {
            diagonal: 15.6,
            ppi: 141,
        };
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq2!(json["command"], "calibrate");
        assert_eq2!(json["ppi"], 141);
    }

    #[test]
    fn test_display_bounds() {
        let report = RulerReport::Bounds {
            width: 90.0,
            height: 500.0,
            translate_x: 90.0,
            translate_y: 0.0,
            cursor: "size-ns".into(),
        };
        assert_eq2!(
            report.to_string(),
            "surface:   90 x 500\ntranslate: (90, 0)\ncursor:    size-ns"
        );
    }

    #[test]
    fn test_display_config_show_without_file() {
        let report = RulerReport::ConfigShow {
            path: "/tmp/config.json".into(),
            exists: false,
            config: RulerConfig::default(),
        };
        let text = report.to_string();
        assert!(text.starts_with("# /tmp/config.json (not created yet, showing defaults)\n{"));
        assert!(text.contains("\"magnifierZoom\": 4"));
    }
}
