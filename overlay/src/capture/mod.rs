// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod edge_detector;
pub mod edge_snapper;
pub mod magnifier;
pub mod pixel_buffer;
pub mod screen_capture;

// Re-export.
pub use edge_detector::*;
pub use edge_snapper::*;
pub use magnifier::*;
pub use pixel_buffer::*;
pub use screen_capture::*;
