// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Rotation;

/// Which double headed arrow the host shows over the resize handles. The ruler axis
/// is bucketed into 45 degree sectors centred on 0, 45, 90 and 135 (and their opposites).
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIter)]
pub enum ResizeCursor {
    #[strum(serialize = "size-we")]
    WestEast,
    #[strum(serialize = "size-nesw")]
    NorthEastSouthWest,
    #[strum(serialize = "size-ns")]
    NorthSouth,
    #[strum(serialize = "size-nwse")]
    NorthWestSouthEast,
}

impl From<Rotation> for ResizeCursor {
    fn from(rotation: Rotation) -> Self {
        // Opposite directions share a cursor, so fold into [0, 180).
        let half_turn = rotation.normalized() % 180.0;
        match half_turn {
            it if !(22.5..157.5).contains(&it) => ResizeCursor::WestEast,
            it if it < 67.5 => ResizeCursor::NorthEastSouthWest,
            it if it < 112.5 => ResizeCursor::NorthSouth,
            _ => ResizeCursor::NorthWestSouthEast,
        }
    }
}
