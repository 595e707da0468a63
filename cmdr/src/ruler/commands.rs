// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use r3bl_ruler_overlay::{CommonError, CommonErrorType, CommonResult, ConfigPaths,
                         DisplayResolution, JsonFileConfigStore, MeasurementConverter,
                         MonitorRect, PhysicalRect, Point, ResizeCursor, ResizeEdge,
                         ResizeOutcome, ResizeSession, Rotation, RulerGeometry,
                         SurfacePlacement, compute_bounds, generate_ticks,
                         try_calibrate, try_get_config_folder_path, try_parse_diagonal};

use super::{CLICommand, ConfigSubcommand, RulerReport, RulerShape, TickRow, UnitOptions};

/// Run one `ruler` command. Nothing here touches the screen; only `config` reads the
/// file system.
///
/// # Errors
///
/// Bad calibration input, an unknown config folder, or a settings file that can't be
/// read or parsed.
pub fn handle_ruler_command(command: CLICommand) -> CommonResult<RulerReport> {
    // % is Display, ? is Debug.
    tracing::debug!(message = "run command", command = ?command);

    match command {
        CLICommand::Bounds { shape } => Ok(bounds(shape)),
        CLICommand::Ticks {
            shape,
            units,
            labeled_only,
        } => Ok(ticks(shape, units, labeled_only)),
        CLICommand::Convert { pixels, units } => Ok(measurement(pixels, units)),
        CLICommand::Distance { from, to, units } => {
            Ok(measurement(from.distance_to(to), units))
        }
        CLICommand::Calibrate {
            diagonal,
            resolution: (width, height),
            scale,
        } => calibrate(&diagonal, DisplayResolution::new(width, height, scale)),
        CLICommand::Resize {
            shape,
            edge,
            position,
            from,
            to,
            monitor: (width, height),
            scale,
        } => Ok(resize(
            shape,
            edge.into(),
            position,
            (from, to),
            MonitorRect::new(PhysicalRect::new(0.0, 0.0, width, height), scale),
        )),
        CLICommand::Config { subcommand } => config(subcommand),
    }
}

fn bounds(shape: RulerShape) -> RulerReport {
    let rotation = Rotation::from_degrees(shape.rotation);
    let bounds = compute_bounds(shape.width, shape.height, rotation);
    RulerReport::Bounds {
        width: bounds.width,
        height: bounds.height,
        translate_x: bounds.translate.x,
        translate_y: bounds.translate.y,
        cursor: ResizeCursor::from(rotation).to_string(),
    }
}

fn ticks(shape: RulerShape, units: UnitOptions, labeled_only: bool) -> RulerReport {
    let markings = generate_ticks(
        shape.width,
        shape.height,
        units.unit,
        units.ppi.into(),
        Rotation::from_degrees(shape.rotation),
    );

    let ticks = markings
        .ticks
        .iter()
        .filter(|it| !labeled_only || it.label.is_some())
        .map(|it| TickRow {
            position: it.position,
            kind: it.kind.to_string(),
            length: it.length(markings.height),
            label: it.label.as_ref().map(|label| label.text.to_string()),
        })
        .collect();

    RulerReport::Ticks {
        unit: markings.unit,
        ticks,
        summary: markings.summary.text.to_string(),
    }
}

fn measurement(pixels: f64, units: UnitOptions) -> RulerReport {
    let converter = MeasurementConverter::new(units.ppi);
    let it = converter.convert(pixels, units.unit);
    RulerReport::Measurement {
        pixels,
        value: it.value,
        unit: it.unit,
        formatted: it.spaced().to_string(),
    }
}

fn calibrate(diagonal: &str, display: DisplayResolution) -> CommonResult<RulerReport> {
    let diagonal = try_parse_diagonal(diagonal)?;
    let ppi = try_calibrate(diagonal, display)?;
    Ok(RulerReport::Calibrate { diagonal, ppi })
}

fn resize(
    shape: RulerShape,
    edge: ResizeEdge,
    position: Point,
    (from, to): (Point, Point),
    monitor: MonitorRect,
) -> RulerReport {
    let geometry = RulerGeometry::new(shape.width, shape.height, shape.rotation);
    let placement = SurfacePlacement {
        origin: position,
        translate: geometry.bounds().translate,
    };

    let mut session = ResizeSession::begin(edge, from, geometry, placement, monitor);
    session.on_render_pass();
    session.update(to);

    match session.end() {
        ResizeOutcome::Completed {
            width,
            position,
            bounds,
        } => RulerReport::Resize {
            width,
            x: position.x,
            y: position.y,
            surface_width: bounds.width,
            surface_height: bounds.height,
        },
        // The render pass above always expands the session.
        ResizeOutcome::Abandoned => RulerReport::Resize {
            width: geometry.width,
            x: position.x,
            y: position.y,
            surface_width: geometry.bounds().width,
            surface_height: geometry.bounds().height,
        },
    }
}

fn try_get_config_file_path() -> CommonResult<PathBuf> {
    match try_get_config_folder_path() {
        Some(folder) => Ok(folder.join(ConfigPaths::ConfigFile.to_string())),
        None => CommonError::new_error_result_with_only_type(
            CommonErrorType::ConfigFolderPathCouldNotBeAccessed,
        ),
    }
}

/// Read only: unlike the overlay, a missing file is not created here.
fn config(subcommand: ConfigSubcommand) -> CommonResult<RulerReport> {
    let path = try_get_config_file_path()?;
    let path_string = path.to_string_lossy().to_string();

    match subcommand {
        ConfigSubcommand::Path => Ok(RulerReport::ConfigPath { path: path_string }),
        ConfigSubcommand::Show => {
            let loaded = JsonFileConfigStore::new(path).try_load()?;
            Ok(RulerReport::ConfigShow {
                path: path_string,
                exists: loaded.is_some(),
                config: loaded.unwrap_or_default(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use r3bl_ruler_overlay::{CalibrationError, MeasurementUnit, assert_eq2, pt};
    use test_case::test_case;

    use super::*;
    use crate::EdgeArg;

    fn shape(width: f64, rotation: f64) -> RulerShape {
        RulerShape {
            width,
            height: 90.0,
            rotation,
        }
    }

    fn units(unit: MeasurementUnit, ppi: f64) -> UnitOptions { UnitOptions { unit, ppi } }

    #[test]
    fn test_bounds_quarter_turn() {
        let report = handle_ruler_command(CLICommand::Bounds {
            shape: shape(500.0, 90.0),
        })
        .unwrap();
        assert_eq2!(
            report,
            RulerReport::Bounds {
                width: 90.0,
                height: 500.0,
                translate_x: 90.0,
                translate_y: 0.0,
                cursor: "size-ns".into(),
            }
        );
    }

    #[test]
    fn test_ticks_labeled_only() {
        let RulerReport::Ticks { ticks, summary, .. } = handle_ruler_command(CLICommand::Ticks {
            shape: shape(500.0, 0.0),
            units: units(MeasurementUnit::Pixels, 96.0),
            labeled_only: true,
        })
        .unwrap() else {
            panic!("expected ticks");
        };
        assert_eq2!(summary, "500 px");
        assert!(ticks.iter().all(|it| it.label.is_some()));
        assert_eq2!(ticks[0].label.as_deref(), Some("50"));
    }

    #[test_case(288.0, MeasurementUnit::Inches, 96.0, "3.00 in")]
    #[test_case(96.0, MeasurementUnit::Centimeters, 96.0, "2.54 cm")]
    #[test_case(141.0, MeasurementUnit::Pixels, 141.0, "141 px")]
    fn test_convert(pixels: f64, unit: MeasurementUnit, ppi: f64, expected: &str) {
        let report = handle_ruler_command(CLICommand::Convert {
            pixels,
            units: units(unit, ppi),
        })
        .unwrap();
        assert_eq2!(report.to_string(), expected);
    }

    #[test]
    fn test_distance() {
        let report = handle_ruler_command(CLICommand::Distance {
            from: pt(100, 100),
            to: pt(130, 140),
            units: units(MeasurementUnit::Pixels, 96.0),
        })
        .unwrap();
        assert_eq2!(report.to_string(), "50 px");
    }

    #[test]
    fn test_calibrate() {
        let run = |diagonal: &str| {
            handle_ruler_command(CLICommand::Calibrate {
                diagonal: diagonal.into(),
                resolution: (1920.0, 1080.0),
                scale: 1.0,
            })
        };

        assert_eq2!(
            run("15.6").unwrap(),
            RulerReport::Calibrate {
                diagonal: 15.6,
                ppi: 141
            }
        );

        let report = run("huge").unwrap_err();
        assert!(matches!(
            report.downcast_ref::<CalibrationError>(),
            Some(CalibrationError::NotANumber { .. })
        ));

        let report = run("2").unwrap_err();
        assert!(matches!(
            report.downcast_ref::<CalibrationError>(),
            Some(CalibrationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_resize_start_edge_keeps_end_fixed() {
        let report = handle_ruler_command(CLICommand::Resize {
            shape: shape(500.0, 0.0),
            edge: EdgeArg::Start,
            position: pt(200, 100),
            from: pt(200, 130),
            to: pt(350, 130),
            monitor: (1920.0, 1080.0),
            scale: 1.0,
        })
        .unwrap();
        assert_eq2!(
            report,
            RulerReport::Resize {
                width: 350.0,
                x: 350.0,
                y: 100.0,
                surface_width: 350.0,
                surface_height: 90.0,
            }
        );
    }
}
