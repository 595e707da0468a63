// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod config_store;
pub mod ruler_config;

// Re-export.
pub use config_store::*;
pub use ruler_config::*;
