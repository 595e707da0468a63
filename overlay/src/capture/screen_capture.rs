// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{CommonError, CommonErrorType, CommonResult, PixelBuffer, Point};

/// Rectangle of the screen to grab, in whole screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptureRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl CaptureRect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn origin(&self) -> Point { Point::new(f64::from(self.x), f64::from(self.y)) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.width == 0 || self.height == 0 }
}

impl Display for CaptureRect {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// Grabs pixels off the screen. The host provides the platform implementation.
pub trait ScreenCapture {
    /// # Errors
    ///
    /// Any failure to read the screen. Callers in this crate log and swallow these.
    fn capture(&mut self, rect: CaptureRect) -> CommonResult<PixelBuffer>;
}

/// A [`ScreenCapture`] that serves crops of a fixed "desktop" image whose top left
/// corner sits at screen `(0, 0)`. Used in tests and by the CLI to simulate snapping.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticScreenCapture {
    pub desktop: PixelBuffer,
    pub capture_count: usize,
}

impl StaticScreenCapture {
    #[must_use]
    pub fn new(desktop: PixelBuffer) -> Self {
        Self {
            desktop,
            capture_count: 0,
        }
    }
}

impl ScreenCapture for StaticScreenCapture {
    fn capture(&mut self, rect: CaptureRect) -> CommonResult<PixelBuffer> {
        self.capture_count += 1;

        if rect.is_empty() {
            return CommonError::new_error_result(
                CommonErrorType::InvalidArguments,
                &format!("Empty capture rect: {rect}"),
            );
        }

        let (Ok(left), Ok(top)) = (usize::try_from(rect.x), usize::try_from(rect.y)) else {
            return CommonError::new_error_result(
                CommonErrorType::ScreenCaptureFailed,
                &format!("Capture rect starts off screen: {rect}"),
            );
        };
        let width = rect.width as usize;
        let height = rect.height as usize;
        if left + width > self.desktop.width() || top + height > self.desktop.height() {
            return CommonError::new_error_result(
                CommonErrorType::ScreenCaptureFailed,
                &format!("Capture rect extends off screen: {rect}"),
            );
        }

        let mut crop = PixelBuffer::filled(width, height, self.desktop.format(), Default::default());
        for row in 0..height {
            for col in 0..width {
                if let Some(color) = self.desktop.pixel(left + col, top + row) {
                    crop.set_pixel(col, row, color);
                }
            }
        }
        Ok(crop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PixelFormat, Rgb, assert_eq2};

    #[test]
    fn test_static_capture_crops() {
        let mut desktop = PixelBuffer::filled(10, 10, PixelFormat::Bgra8, Rgb::new(0, 0, 0));
        desktop.set_pixel(5, 5, Rgb::new(9, 9, 9));
        let mut capture = StaticScreenCapture::new(desktop);

        let crop = capture.capture(CaptureRect::new(4, 4, 3, 3)).unwrap();
        assert_eq2!(crop.pixel(1, 1), Some(Rgb::new(9, 9, 9)));
        assert_eq2!(crop.pixel(0, 0), Some(Rgb::new(0, 0, 0)));
        assert_eq2!(capture.capture_count, 1);
    }

    #[test]
    fn test_static_capture_off_screen() {
        let desktop = PixelBuffer::filled(10, 10, PixelFormat::Bgra8, Rgb::default());
        let mut capture = StaticScreenCapture::new(desktop);

        let report = capture.capture(CaptureRect::new(-1, 0, 3, 3)).unwrap_err();
        assert_eq2!(
            CommonError::error_type_of(&report),
            Some(CommonErrorType::ScreenCaptureFailed)
        );
        assert!(capture.capture(CaptureRect::new(8, 8, 3, 3)).is_err());
        assert!(capture.capture(CaptureRect::new(0, 0, 0, 3)).is_err());
    }
}
