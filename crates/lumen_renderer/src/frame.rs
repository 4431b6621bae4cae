//! Quantized raster output and image-file writers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Deserialize;

use crate::error::{OutputError, OutputResult};
use crate::partition::RowRange;

/// An 8-bit RGB triple.
pub type Rgb = [u8; 3];

/// File format of a persisted frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Plain-text "P3" pixmap
    Ppm,
    /// Compressed PNG
    #[default]
    Png,
}

impl ImageFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Ppm => "ppm",
            ImageFormat::Png => "png",
        }
    }
}

/// A finished image: rows stored top-first, pixels left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb>,
}

impl Frame {
    /// Create a new frame filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; width as usize * height as usize],
        }
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at raster position (x, y), y = 0 being the top row.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.offset(x, y)]
    }

    /// Set the pixel at raster position (x, y).
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: Rgb) {
        let i = self.offset(x, y);
        self.pixels[i] = rgb;
    }

    /// Hand out one disjoint mutable slice per row range.
    ///
    /// `ranges` must be contiguous and start at row 0, as produced by
    /// [`crate::partition_rows`].
    pub fn split_rows_mut(&mut self, ranges: &[RowRange]) -> Vec<(RowRange, &mut [Rgb])> {
        let width = self.width;
        let mut rest: &mut [Rgb] = &mut self.pixels;
        let mut bands = Vec::with_capacity(ranges.len());
        let mut expected_start = 0;

        for range in ranges {
            debug_assert_eq!(range.start, expected_start, "row ranges must be contiguous");
            expected_start = range.end;

            let (band, tail) = std::mem::take(&mut rest).split_at_mut(range.pixel_count(width));
            bands.push((*range, band));
            rest = tail;
        }

        bands
    }

    /// Flatten to packed RGB bytes.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    /// Write as an ASCII "P3" pixmap.
    pub fn write_ppm<W: Write>(&self, writer: &mut W) -> OutputResult<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        for [r, g, b] in &self.pixels {
            writeln!(writer, "{} {} {}", r, g, b)?;
        }

        Ok(())
    }

    /// Persist the frame to `path` in the given format.
    pub fn save(&self, path: impl AsRef<Path>, format: ImageFormat) -> OutputResult<()> {
        let path = path.as_ref();
        match format {
            ImageFormat::Ppm => {
                let mut writer = BufWriter::new(File::create(path)?);
                self.write_ppm(&mut writer)?;
                writer.flush()?;
            }
            ImageFormat::Png => {
                let buffer = image::RgbImage::from_raw(self.width, self.height, self.to_rgb_bytes())
                    .ok_or(OutputError::BufferSize {
                        width: self.width,
                        height: self.height,
                    })?;
                buffer.save_with_format(path, image::ImageFormat::Png)?;
            }
        }

        log::debug!("Wrote {}x{} frame to {}", self.width, self.height, path.display());
        Ok(())
    }
}
