// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod capture_throttle;
pub mod common_result_and_error;
pub mod decl_macros;
pub mod sizes;

// Re-export.
pub use capture_throttle::*;
pub use common_result_and_error::*;
pub use sizes::*;
