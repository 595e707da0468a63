// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::Display;

use crate::{InlineString, MeasurementUnit};

pub const TICK_LABEL_FONT_SIZE: f64 = 10.0;
pub const SUMMARY_LABEL_FONT_SIZE: f64 = 11.0;

/// Tick prominence, from longest to shortest. How long each kind is depends on the unit,
/// see [`TickKind::height_fraction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TickKind {
    Major,
    Medium,
    Minor,
    Hairline,
}

impl TickKind {
    /// Tick length as a fraction of the ruler height.
    #[must_use]
    pub fn height_fraction(self, unit: MeasurementUnit) -> f64 {
        match (unit, self) {
            (_, TickKind::Major) => 0.40,
            (_, TickKind::Medium) => 0.28,
            (MeasurementUnit::Pixels, TickKind::Minor) => 0.16,
            (MeasurementUnit::Pixels, TickKind::Hairline) => 0.08,
            (MeasurementUnit::Inches | MeasurementUnit::Centimeters, TickKind::Minor) => {
                0.20
            }
            (MeasurementUnit::Inches | MeasurementUnit::Centimeters, TickKind::Hairline) => {
                0.12
            }
        }
    }
}

/// Text drawn next to a tick (or the summary). `left` and `top` are in the ruler's
/// local frame; the text is rotated by `counter_rotation` degrees about its own centre
/// so it reads upright however the ruler is turned.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLabel {
    pub text: InlineString,
    pub left: f64,
    pub top: f64,
    pub counter_rotation: f64,
}

/// One vertical line segment of a tick, in the ruler's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSegment {
    pub x: f64,
    pub y1: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickMark {
    /// Distance from the start of the ruler, `0 <= position < width`.
    pub position: f64,
    pub kind: TickKind,
    /// In `(0, 1]`.
    pub height_fraction: f64,
    pub label: Option<TickLabel>,
}

impl TickMark {
    #[must_use]
    pub fn length(&self, ruler_height: f64) -> f64 { ruler_height * self.height_fraction }

    /// Ticks are drawn twice, growing inward from both long edges: `[top, bottom]`.
    #[must_use]
    pub fn segments(&self, ruler_height: f64) -> [TickSegment; 2] {
        let length = self.length(ruler_height);
        [
            TickSegment {
                x: self.position,
                y1: 0.0,
                y2: length,
            },
            TickSegment {
                x: self.position,
                y1: ruler_height - length,
                y2: ruler_height,
            },
        ]
    }
}

/// Everything drawn on the ruler face for one state.
#[derive(Debug, Clone, PartialEq)]
pub struct RulerMarkings {
    pub unit: MeasurementUnit,
    pub width: f64,
    pub height: f64,
    /// Ordered by position.
    pub ticks: Vec<TickMark>,
    /// Total length, eg: `"500 px"`.
    pub summary: TickLabel,
}

impl RulerMarkings {
    pub fn labels(&self) -> impl Iterator<Item = &TickLabel> {
        self.ticks.iter().filter_map(|it| it.label.as_ref())
    }

    #[must_use]
    pub fn tick_at(&self, position: f64) -> Option<&TickMark> {
        self.ticks
            .iter()
            .find(|it| (it.position - position).abs() < 1e-6)
    }
}
