// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod edge_guides;
pub mod point_to_point;
pub mod ruler_color;
pub mod ruler_controller;
pub mod ruler_state;

// Re-export.
pub use edge_guides::*;
pub use point_to_point::*;
pub use ruler_color::*;
pub use ruler_controller::*;
pub use ruler_state::*;
