// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod tick_generator;
pub mod tick_mark;

// Re-export.
pub use tick_generator::*;
pub use tick_mark::*;
