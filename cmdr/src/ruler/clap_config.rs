// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, Subcommand, ValueEnum};
use r3bl_ruler_overlay::{DEFAULT_PPI, DEFAULT_RULER_HEIGHT, DEFAULT_RULER_WIDTH,
                         MeasurementUnit, Point, ResizeEdge};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "ruler")]
#[command(about = "📏 Measure anything on screen, from the terminal")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  ruler [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(global = true, long, help = "Print results as JSON")]
    pub json: bool,
}

/// Ruler size and angle, shared by the commands that lay out a ruler.
#[derive(Debug, Clone, Copy, Args)]
pub struct RulerShape {
    #[arg(long, default_value_t = f64::from(DEFAULT_RULER_WIDTH), help = "Length along the ruler")]
    pub width: f64,

    #[arg(long, default_value_t = f64::from(DEFAULT_RULER_HEIGHT), help = "Thickness of the ruler")]
    pub height: f64,

    #[arg(
        long,
        short = 'r',
        default_value_t = 0.0,
        allow_negative_numbers = true,
        help = "Clockwise angle in degrees"
    )]
    pub rotation: f64,
}

/// Unit and display density, shared by the commands that print measurements.
#[derive(Debug, Clone, Copy, Args)]
pub struct UnitOptions {
    #[arg(
        long,
        short = 'u',
        default_value = "pixels",
        value_parser = parse_unit,
        help = "pixels (px), inches (in) or centimeters (cm)"
    )]
    pub unit: MeasurementUnit,

    #[arg(long, default_value_t = DEFAULT_PPI, help = "Pixels per inch of the display")]
    pub ppi: f64,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "📐 Surface size and content offset for a rotated ruler\n💡 Eg: `ruler bounds -r 30`")]
    Bounds {
        #[command(flatten)]
        shape: RulerShape,
    },

    #[clap(about = "📏 Tick marks and labels for a ruler\n💡 Eg: `ruler ticks -u in --ppi 141`")]
    Ticks {
        #[command(flatten)]
        shape: RulerShape,

        #[command(flatten)]
        units: UnitOptions,

        #[arg(long, help = "Only print labeled ticks")]
        labeled_only: bool,
    },

    #[clap(about = "🔁 Convert a pixel length into another unit\n💡 Eg: `ruler convert 288 -u cm`")]
    Convert {
        pixels: f64,

        #[command(flatten)]
        units: UnitOptions,
    },

    #[clap(about = "📍 Distance between two screen points\n💡 Eg: `ruler distance 100,100 130,140`")]
    Distance {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        from: Point,

        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        to: Point,

        #[command(flatten)]
        units: UnitOptions,
    },

    #[clap(about = "🖥️ Work out the PPI of a display from its diagonal\n💡 Eg: `ruler calibrate 15.6 --resolution 1920x1080`")]
    Calibrate {
        #[arg(help = "Screen diagonal in inches")]
        diagonal: String,

        #[arg(
            long,
            default_value = "1920x1080",
            value_parser = parse_resolution,
            help = "Logical resolution, WIDTHxHEIGHT"
        )]
        resolution: (f64, f64),

        #[arg(long, default_value_t = 1.0, help = "Display scale factor, eg: 1.5 for 150%")]
        scale: f64,
    },

    #[clap(about = "↔️ Simulate dragging a resize handle\n💡 Eg: `ruler resize --edge start --from 200,130 --to 350,130`")]
    Resize {
        #[command(flatten)]
        shape: RulerShape,

        #[arg(long, value_enum, default_value_t = EdgeArg::End, help = "Handle being dragged")]
        edge: EdgeArg,

        #[arg(
            long,
            default_value = "0,0",
            value_parser = parse_point,
            allow_hyphen_values = true,
            help = "Top left of the ruler surface, logical units"
        )]
        position: Point,

        #[arg(long, value_parser = parse_point, allow_hyphen_values = true, help = "Pointer down, physical pixels")]
        from: Point,

        #[arg(long, value_parser = parse_point, allow_hyphen_values = true, help = "Pointer up, physical pixels")]
        to: Point,

        #[arg(
            long,
            default_value = "1920x1080",
            value_parser = parse_resolution,
            help = "Physical size of the monitor, WIDTHxHEIGHT"
        )]
        monitor: (f64, f64),

        #[arg(long, default_value_t = 1.0, help = "Display scale factor")]
        scale: f64,
    },

    #[clap(about = "⚙️ Inspect the saved ruler settings\n💡 Eg: `ruler config show`")]
    Config {
        #[arg(value_enum, default_value_t = ConfigSubcommand::Show)]
        subcommand: ConfigSubcommand,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EdgeArg {
    #[clap(help = "The `x = 0` end")]
    Start,
    #[clap(help = "The `x = width` end")]
    End,
}

impl From<EdgeArg> for ResizeEdge {
    fn from(it: EdgeArg) -> Self {
        match it {
            EdgeArg::Start => ResizeEdge::Start,
            EdgeArg::End => ResizeEdge::End,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigSubcommand {
    #[clap(help = "Print the settings, with defaults filled in")]
    Show,
    #[clap(help = "Print where the settings file lives")]
    Path,
}

/// `"x,y"`, eg: `"100,-20.5"`.
///
/// # Errors
///
/// Returns a message for clap to show when the text isn't two comma separated numbers.
pub fn parse_point(it: &str) -> Result<Point, String> {
    let (x, y) = split_pair(it, ',').ok_or_else(|| format!("expected x,y but got `{it}`"))?;
    Ok(Point::new(x, y))
}

/// `"WIDTHxHEIGHT"`, eg: `"2560x1440"`. Both must be positive.
///
/// # Errors
///
/// Returns a message for clap to show when the text isn't two positive numbers
/// separated by `x`.
pub fn parse_resolution(it: &str) -> Result<(f64, f64), String> {
    split_pair(&it.to_ascii_lowercase(), 'x')
        .filter(|(width, height)| *width > 0.0 && *height > 0.0)
        .ok_or_else(|| format!("expected WIDTHxHEIGHT but got `{it}`"))
}

/// Full unit names plus the shorthand people type on a command line, eg: `"cm"`.
///
/// # Errors
///
/// Returns a message for clap to show when the text names no unit.
pub fn parse_unit(it: &str) -> Result<MeasurementUnit, String> {
    let name = match it.trim().to_ascii_lowercase().as_str() {
        "px" | "pixel" => "pixels".to_string(),
        "in" | "inch" => "inches".to_string(),
        "cm" | "centimeter" | "centimetre" | "centimetres" => "centimeters".to_string(),
        other => other.to_string(),
    };
    name.parse::<MeasurementUnit>()
        .map_err(|_| format!("expected pixels, inches or centimeters but got `{it}`"))
}

fn split_pair(it: &str, separator: char) -> Option<(f64, f64)> {
    let (first, second) = it.split_once(separator)?;
    let first = first.trim().parse::<f64>().ok().filter(|it| it.is_finite())?;
    let second = second.trim().parse::<f64>().ok().filter(|it| it.is_finite())?;
    Some((first, second))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use r3bl_ruler_overlay::{assert_eq2, pt};
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_command_is_well_formed() { CLIArg::command().debug_assert(); }

    #[test_case("100,100", Some(pt(100, 100)))]
    #[test_case(" -20.5 , 7 ", Some(pt(-20.5, 7)))]
    #[test_case("100", None)]
    #[test_case("a,b", None)]
    #[test_case("inf,1", None)]
    fn test_parse_point(input: &str, expected: Option<Point>) {
        assert_eq2!(parse_point(input).ok(), expected);
    }

    #[test_case("1920x1080", Some((1920.0, 1080.0)))]
    #[test_case("2560X1440", Some((2560.0, 1440.0)))]
    #[test_case("0x1080", None)]
    #[test_case("1920", None)]
    fn test_parse_resolution(input: &str, expected: Option<(f64, f64)>) {
        assert_eq2!(parse_resolution(input).ok(), expected);
    }

    #[test_case("px", Some(MeasurementUnit::Pixels))]
    #[test_case("IN", Some(MeasurementUnit::Inches))]
    #[test_case("cm", Some(MeasurementUnit::Centimeters))]
    #[test_case("Centimeters", Some(MeasurementUnit::Centimeters))]
    #[test_case("furlongs", None)]
    fn test_parse_unit(input: &str, expected: Option<MeasurementUnit>) {
        assert_eq2!(parse_unit(input).ok(), expected);
    }

    #[test]
    fn test_parse_ticks() {
        let arg = CLIArg::try_parse_from([
            "ruler", "ticks", "-u", "in", "--ppi", "141", "--width", "300", "-l",
        ])
        .unwrap();
        assert!(arg.global_options.enable_logging);
        let CLICommand::Ticks { shape, units, .. } = arg.command else {
            panic!("expected ticks");
        };
        assert_eq2!(shape.width, 300.0);
        assert_eq2!(shape.height, 90.0);
        assert_eq2!(units.unit, MeasurementUnit::Inches);
        assert_eq2!(units.ppi, 141.0);
    }

    #[test]
    fn test_parse_resize_with_negative_numbers() {
        let arg = CLIArg::try_parse_from([
            "ruler", "resize", "--edge", "start", "-r", "-45", "--from", "-10,5", "--to",
            "20,5",
        ])
        .unwrap();
        let CLICommand::Resize {
            shape, edge, from, ..
        } = arg.command
        else {
            panic!("expected resize");
        };
        assert_eq2!(shape.rotation, -45.0);
        assert_eq2!(edge, EdgeArg::Start);
        assert_eq2!(from, pt(-10, 5));
    }

    #[test]
    fn test_config_defaults_to_show() {
        let arg = CLIArg::try_parse_from(["ruler", "config"]).unwrap();
        assert!(matches!(
            arg.command,
            CLICommand::Config {
                subcommand: ConfigSubcommand::Show
            }
        ));
    }
}
