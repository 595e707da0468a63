// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumString};

use crate::MAX_MAGNIFIER_ZOOM;

/// Byte layout of a single pixel in a [`PixelBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PixelFormat {
    /// What screen grabs on most platforms hand back.
    #[default]
    Bgra8,
    Rgba8,
    Rgb8,
}

impl PixelFormat {
    #[must_use]
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Bgra8 | PixelFormat::Rgba8 => 4,
            PixelFormat::Rgb8 => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Euclidean distance in RGB space, `sqrt(ΔR² + ΔG² + ΔB²)`. Alpha is ignored.
    #[must_use]
    pub fn color_distance(self, other: Rgb) -> f64 {
        let red = f64::from(self.red) - f64::from(other.red);
        let green = f64::from(self.green) - f64::from(other.green);
        let blue = f64::from(self.blue) - f64::from(other.blue);
        (red * red + green * green + blue * blue).sqrt()
    }
}

#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    #[error("Row stride {stride} is too small for {width} pixels of {format}")]
    #[diagnostic(code(ruler::pixel_buffer::stride_too_small))]
    StrideTooSmall {
        stride: usize,
        width: usize,
        format: PixelFormat,
    },

    #[error("Expected at least {expected} bytes of pixel data, got {actual}")]
    #[diagnostic(
        code(ruler::pixel_buffer::truncated),
        help("The capture was probably cut short, try again")
    )]
    Truncated { expected: usize, actual: usize },
}

/// A captured rectangle of screen pixels. Rows are `stride` bytes apart, which may be
/// more than `width × bytes_per_pixel` when the platform pads rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    stride: usize,
    format: PixelFormat,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// # Errors
    ///
    /// Returns [`PixelBufferError`] when `stride` can't hold a row, or `data` can't hold
    /// `height` rows.
    pub fn try_new(
        width: usize,
        height: usize,
        stride: usize,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Result<Self, PixelBufferError> {
        let row_bytes = width * format.bytes_per_pixel();
        if stride < row_bytes {
            return Err(PixelBufferError::StrideTooSmall {
                stride,
                width,
                format,
            });
        }

        // The last row doesn't need its padding.
        let expected = match height {
            0 => 0,
            _ => stride * (height - 1) + row_bytes,
        };
        if data.len() < expected {
            return Err(PixelBufferError::Truncated {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            stride,
            format,
            data,
        })
    }

    /// Tightly packed buffer filled with one color. Handy for tests and placeholders.
    #[must_use]
    pub fn filled(width: usize, height: usize, format: PixelFormat, color: Rgb) -> Self {
        let pixel = encode(format, color);
        let data = pixel
            .iter()
            .copied()
            .cycle()
            .take(width * height * format.bytes_per_pixel())
            .collect();
        Self {
            width,
            height,
            stride: width * format.bytes_per_pixel(),
            format,
            data,
        }
    }

    #[must_use]
    pub fn width(&self) -> usize { self.width }

    #[must_use]
    pub fn height(&self) -> usize { self.height }

    #[must_use]
    pub fn stride(&self) -> usize { self.stride }

    #[must_use]
    pub fn format(&self) -> PixelFormat { self.format }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.width == 0 || self.height == 0 }

    fn offset(&self, col: usize, row: usize) -> Option<usize> {
        (col < self.width && row < self.height)
            .then(|| row * self.stride + col * self.format.bytes_per_pixel())
    }

    /// Color at `(col, row)`, or [`None`] outside the buffer.
    #[must_use]
    pub fn pixel(&self, col: usize, row: usize) -> Option<Rgb> {
        let offset = self.offset(col, row)?;
        let bytes = self
            .data
            .get(offset..offset + self.format.bytes_per_pixel())?;
        Some(match self.format {
            PixelFormat::Bgra8 => Rgb::new(bytes[2], bytes[1], bytes[0]),
            PixelFormat::Rgba8 | PixelFormat::Rgb8 => Rgb::new(bytes[0], bytes[1], bytes[2]),
        })
    }

    /// Overwrite the color at `(col, row)`. Out of range writes are ignored. Alpha (when
    /// the format has it) becomes opaque.
    pub fn set_pixel(&mut self, col: usize, row: usize, color: Rgb) {
        let Some(offset) = self.offset(col, row) else {
            return;
        };
        let pixel = encode(self.format, color);
        if let Some(slot) = self.data.get_mut(offset..offset + pixel.len()) {
            slot.copy_from_slice(&pixel);
        }
    }

    /// Nearest neighbor upscale by an integer `zoom`, so each source pixel becomes a
    /// `zoom × zoom` block. The result is tightly packed. `zoom` is clamped to
    /// `1..=`[`MAX_MAGNIFIER_ZOOM`].
    #[must_use]
    pub fn scaled(&self, zoom: usize) -> PixelBuffer {
        let zoom = zoom.clamp(1, MAX_MAGNIFIER_ZOOM as usize);
        let bytes_per_pixel = self.format.bytes_per_pixel();
        let width = self.width * zoom;
        let height = self.height * zoom;
        let mut data = Vec::with_capacity(width * height * bytes_per_pixel);

        for row in 0..height {
            let source_row = row / zoom;
            for col in 0..width {
                let source_col = col / zoom;
                let offset = source_row * self.stride + source_col * bytes_per_pixel;
                data.extend_from_slice(&self.data[offset..offset + bytes_per_pixel]);
            }
        }

        PixelBuffer {
            width,
            height,
            stride: width * bytes_per_pixel,
            format: self.format,
            data,
        }
    }
}

fn encode(format: PixelFormat, color: Rgb) -> Vec<u8> {
    match format {
        PixelFormat::Bgra8 => vec![color.blue, color.green, color.red, u8::MAX],
        PixelFormat::Rgba8 => vec![color.red, color.green, color.blue, u8::MAX],
        PixelFormat::Rgb8 => vec![color.red, color.green, color.blue],
    }
}
