// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Failures that the ruler swallows must still show up in the log file.

use std::time::Instant;

use r3bl_ruler_overlay::{CaptureRect, CommonError, CommonErrorType, CommonResult,
                         EdgeSnapper, InMemoryConfigStore, PixelBuffer, RulerController,
                         ScreenCapture, TracingConfig, try_create_temp_dir,
                         try_initialize_logging_thread_local};
use serial_test::serial;

#[derive(Debug, Default)]
struct UnpluggedDisplay;

impl ScreenCapture for UnpluggedDisplay {
    fn capture(&mut self, _rect: CaptureRect) -> CommonResult<PixelBuffer> {
        CommonError::new_error_result(CommonErrorType::ScreenCaptureFailed, "display gone")
    }
}

fn read_log_after(path: &str, run: impl FnOnce()) -> String {
    let guard = try_initialize_logging_thread_local(TracingConfig::new_file(Some(
        path.to_string(),
    )))
    .unwrap();
    assert!(guard.is_some());

    run();

    drop(guard);
    std::fs::read_to_string(path).unwrap()
}

#[test]
#[serial]
fn test_failed_save_is_logged() {
    let temp_dir = try_create_temp_dir().unwrap();
    let log_file = temp_dir.join("log.txt").to_string_lossy().to_string();

    let log = read_log_after(&log_file, || {
        let mut controller = RulerController::new(InMemoryConfigStore {
            fail_saves: true,
            ..Default::default()
        });
        controller.set_width(640.0);
    });

    assert!(log.contains("ruler state changed"));
    assert!(log.contains("Could not save ruler settings."));
}

#[test]
#[serial]
fn test_failed_capture_is_logged() {
    let temp_dir = try_create_temp_dir().unwrap();
    let log_file = temp_dir.join("log.txt").to_string_lossy().to_string();

    let log = read_log_after(&log_file, || {
        let mut snapper = EdgeSnapper::new(UnpluggedDisplay);
        assert!(snapper.snap_x(100.0, 0.0, 90.0, Instant::now()).is_none());
    });

    assert!(log.contains("edge snapping capture failed"));
    assert!(log.contains("WARN"));
}

#[test]
#[serial]
fn test_logging_off_installs_nothing() {
    let guard = try_initialize_logging_thread_local(false).unwrap();
    assert!(guard.is_none());
}
