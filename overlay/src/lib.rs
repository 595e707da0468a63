// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_ruler_overlay
//!
//! The engine behind an on-screen measurement ruler: a draggable, resizable, rotatable
//! strip that renders calibrated tick marks in pixels, inches, or centimeters.
//!
//! Everything in here is headless. The host application owns the window, the input
//! events and the pixels on screen, and talks to this crate through a handful of
//! operations and traits:
//!
//! | Concern                         | Entry point                                   |
//! |---------------------------------|-----------------------------------------------|
//! | Rotated bounding box            | [`compute_bounds`]                            |
//! | Anchor preserving edge resize   | [`ResizeSession`]                             |
//! | Tick marks and labels           | [`generate_ticks`]                            |
//! | Unit conversion and formatting  | [`MeasurementConverter`], [`convert`]         |
//! | Color edge snapping             | [`detect_edges`], [`nearest_snap`], [`EdgeSnapper`] |
//! | PPI calibration                 | [`calibrate`], [`CalibrationForm`]            |
//! | Reactive state owner            | [`RulerController`]                           |
//! | Persisted settings              | [`RulerConfig`], [`JsonFileConfigStore`]      |
//!
//! Platform services are modeled as traits so that the host (or a test) can plug in its
//! own implementation: [`ScreenCapture`], [`ConfigStore`], [`ClipboardService`] and
//! [`HotkeyRegistry`].
//!
//! All coordinates are logical units (device independent pixels) unless a name says
//! `physical`. Physical = logical × display scale.

// Enable clippy unwrap_in_result lint for production code only (not tests).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod capture;
pub mod config;
pub mod core;
pub mod geometry;
pub mod measure;
pub mod ruler;
pub mod services;
pub mod ticks;

// Re-export.
pub use capture::*;
pub use config::*;
pub use core::*;
pub use geometry::*;
pub use measure::*;
pub use ruler::*;
pub use services::*;
pub use ticks::*;
