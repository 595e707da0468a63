// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod calibration;
pub mod converter;
pub mod ppi;
pub mod unit;

// Re-export.
pub use calibration::*;
pub use converter::*;
pub use ppi::*;
pub use unit::*;
