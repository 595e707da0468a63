// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl-ruler-cmdr
//!
//! The `ruler` binary drives the [`r3bl_ruler_overlay`] engine from the terminal, with no
//! window. It's handy for checking what the overlay will do for a given size, angle, unit
//! or display before touching the GUI, and for finding the settings file.
//!
//! ```text
//! ruler bounds --width 500 --height 90 --rotation 30
//! ruler ticks --unit inches --ppi 141 --width 300
//! ruler convert 288 --unit cm
//! ruler distance 100,100 130,140
//! ruler calibrate 15.6 --resolution 1920x1080
//! ruler resize --edge start --from 200,130 --to 350,130
//! ruler config show
//! ```
//!
//! Pass `--enable-logging` (`-l`) to any command to write a `log.txt` in the current
//! folder.

// Enable clippy unwrap_in_result lint for production code only (not tests).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod ruler;

// Re-export.
pub use ruler::*;
