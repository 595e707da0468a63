// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tick marks and labels for each unit.
//!
//! | Unit        | Step           | Major (labeled) | Medium          | Minor          | Hairline |
//! |-------------|----------------|-----------------|-----------------|----------------|----------|
//! | pixels      | 5              | every 100       | every 50 (lab.) | every 10       | rest     |
//! | inches      | PPI / 8        | whole inch      | half inch       | quarter inches | rest     |
//! | centimeters | PPI / 2.54 / 2 | whole cm        |                 | half cm        |          |
//!
//! Positions are `index × step` and the kind comes from the index, so long rulers at
//! odd PPI values don't drift or misclassify ticks.

use crate::{InlineString, MeasurementConverter, MeasurementUnit, Ppi, Rotation,
            RulerMarkings, TickKind, TickLabel, TickMark, format_spaced, inline_string,
            sanitize_length};

pub const PIXEL_TICK_STEP: f64 = 5.0;

/// The summary label sits this far in from the end of the ruler.
pub const SUMMARY_LABEL_INSET: f64 = 55.0;

/// Tick labels closer than this to the summary label are dropped.
pub const SUMMARY_LABEL_CLEARANCE: f64 = 10.0;

pub const TICK_LABEL_OFFSET: f64 = -10.0;
pub const CENTIMETER_LABEL_OFFSET: f64 = -12.0;
pub const TICK_LABEL_GAP: f64 = 2.0;

/// Upper bound on ticks per pass. Only reachable with an absurdly small PPI.
pub const MAX_TICK_COUNT: u32 = 20_000;

/// Distance between consecutive ticks for `unit`.
#[must_use]
pub fn tick_step(unit: MeasurementUnit, ppi: Ppi) -> f64 {
    match unit {
        MeasurementUnit::Pixels => PIXEL_TICK_STEP,
        MeasurementUnit::Inches => ppi.value() / 8.0,
        MeasurementUnit::Centimeters => ppi.pixels_per_centimeter() / 2.0,
    }
}

/// Kind of the tick at `index`, and the label text if it gets one.
fn classify(unit: MeasurementUnit, index: u32, position: f64) -> (TickKind, Option<InlineString>) {
    match unit {
        MeasurementUnit::Pixels => {
            let kind = if index.is_multiple_of(20) {
                TickKind::Major
            } else if index.is_multiple_of(10) {
                TickKind::Medium
            } else if index.is_multiple_of(2) {
                TickKind::Minor
            } else {
                TickKind::Hairline
            };
            let labeled = matches!(kind, TickKind::Major | TickKind::Medium) && index > 0;
            (kind, labeled.then(|| inline_string!("{position:.0}")))
        }
        MeasurementUnit::Inches => match index % 8 {
            0 => (
                TickKind::Major,
                (index >= 8).then(|| inline_string!("{}\"", index / 8)),
            ),
            4 => (TickKind::Medium, None),
            2 | 6 => (TickKind::Minor, None),
            _ => (TickKind::Hairline, None),
        },
        MeasurementUnit::Centimeters => {
            if index.is_multiple_of(2) {
                (
                    TickKind::Major,
                    (index >= 2).then(|| inline_string!("{}cm", index / 2)),
                )
            } else {
                (TickKind::Minor, None)
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn tick_count(width: f64, step: f64) -> u32 {
    let count = (width / step).ceil();
    if count > f64::from(MAX_TICK_COUNT) {
        // % is Display, ? is Debug.
        tracing::warn!(
            message = "tick count capped",
            width = %width,
            step = %step,
            cap = %MAX_TICK_COUNT
        );
        MAX_TICK_COUNT
    } else {
        // Finite and in [0, MAX_TICK_COUNT] here.
        count.max(0.0) as u32
    }
}

/// Ticks covering `[0, width)` plus the total length label. Rotation only affects label
/// orientation. Total: bad sizes produce an empty ruler, a bad PPI falls back to 96.
///
/// ```
/// use r3bl_ruler_overlay::{generate_ticks, MeasurementUnit, Ppi, Rotation};
/// let it = generate_ticks(500.0, 90.0, MeasurementUnit::Pixels, Ppi::default(), Rotation::default());
/// assert_eq!(it.ticks.len(), 100);
/// assert_eq!(it.summary.text, "500 px");
/// ```
#[must_use]
pub fn generate_ticks(
    width: f64,
    height: f64,
    unit: MeasurementUnit,
    ppi: Ppi,
    rotation: Rotation,
) -> RulerMarkings {
    let width = sanitize_length(width);
    let height = sanitize_length(height);
    let step = tick_step(unit, ppi);
    let counter_rotation = rotation.counter_rotation();
    let suppress_from = width - SUMMARY_LABEL_INSET - SUMMARY_LABEL_CLEARANCE;
    let label_offset = match unit {
        MeasurementUnit::Centimeters => CENTIMETER_LABEL_OFFSET,
        MeasurementUnit::Pixels | MeasurementUnit::Inches => TICK_LABEL_OFFSET,
    };

    let count = tick_count(width, step);
    let mut ticks = Vec::with_capacity(count as usize);

    for index in 0..count {
        let position = f64::from(index) * step;
        if position >= width {
            break;
        }

        let (kind, label_text) = classify(unit, index, position);
        let height_fraction = kind.height_fraction(unit);
        let label = label_text
            .filter(|_| !(position >= suppress_from && position <= width))
            .map(|text| TickLabel {
                text,
                left: position + label_offset,
                top: height * height_fraction + TICK_LABEL_GAP,
                counter_rotation,
            });

        ticks.push(TickMark {
            position,
            kind,
            height_fraction,
            label,
        });
    }

    let total = MeasurementConverter::new(ppi).pixels_to(unit, width);
    let summary = TickLabel {
        text: format_spaced(total, unit),
        left: width - SUMMARY_LABEL_INSET,
        top: height / 2.0 - 8.0,
        counter_rotation,
    };

    RulerMarkings {
        unit,
        width,
        height,
        ticks,
        summary,
    }
}
