// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rotation aware geometry for the ruler surface.
//!
//! The ruler is drawn in its own local frame: the long axis runs along `+x` from `0` to
//! `width`, and the short axis along `+y` from `0` to `height`. The host window (the
//! "surface") is the axis aligned bounding box of that rectangle after rotation, and the
//! content is shifted by a translation so that every rotated corner lands inside it.

// Attach sources.
pub mod monitor;
pub mod point;
pub mod resize_cursor;
pub mod resize_session;
pub mod rotated_bounds;
pub mod rotation;

// Re-export.
pub use monitor::*;
pub use point::*;
pub use resize_cursor::*;
pub use resize_session::*;
pub use rotated_bounds::*;
pub use rotation::*;
