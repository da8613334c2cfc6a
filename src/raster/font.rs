//! TrueType/OpenType rasterizer backed by `fontdue`.

use std::fs;
use std::path::Path;

use fontdue::{Font, FontSettings};
use image::{GrayImage, Luma};

use crate::error::{OsdError, Result};
use crate::types::{Level, LevelCodes};

use super::Rasterizer;

/// Smallest pixel size tried when fitting a font to a height bound.
pub const MIN_FONT_SIZE: u32 = 7;

/// Largest pixel size tried when fitting a font to a height bound.
pub const MAX_FONT_SIZE: u32 = 100;

/// Coverage at or above this value is ink.
const COVERAGE_THRESHOLD: u8 = 128;

/// Pick the largest size whose measured height fits within `bound`.
///
/// Sizes are tried from [`MAX_FONT_SIZE`] down to [`MIN_FONT_SIZE`]. When
/// nothing fits, the smallest size is used anyway. Returns `(size, height)`.
pub fn select_size(bound: u32, measure: impl Fn(u32) -> u32) -> (u32, u32) {
    for size in (MIN_FONT_SIZE..=MAX_FONT_SIZE).rev() {
        let height = measure(size);
        if height <= bound {
            return (size, height);
        }
    }
    (MIN_FONT_SIZE, measure(MIN_FONT_SIZE))
}

/// Rasterizes characters from an outline font at a fixed pixel size.
pub struct FontRasterizer {
    font: Font,
    size: u32,
    ascent: f32,
    height: u32,
}

impl FontRasterizer {
    /// Load a font file and fit it to `height_bound` pixels.
    ///
    /// With `fixed_height`, every bitmap is exactly `height_bound` tall;
    /// otherwise bitmaps take the font's own line height at the chosen size.
    pub fn load(path: &Path, height_bound: u32, fixed_height: bool) -> Result<Self> {
        let data = fs::read(path).map_err(|e| OsdError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read font: {}", e),
        })?;

        Self::from_bytes(data, height_bound, fixed_height).map_err(|e| match e {
            OsdError::Config { message, help } => OsdError::Config {
                message: format!("{}: {}", path.display(), message),
                help,
            },
            other => other,
        })
    }

    /// Parse font data and fit it to `height_bound` pixels.
    pub fn from_bytes(data: Vec<u8>, height_bound: u32, fixed_height: bool) -> Result<Self> {
        let font = Font::from_bytes(data, FontSettings::default()).map_err(|e| OsdError::Config {
            message: format!("Invalid font: {}", e),
            help: Some("Use a TrueType (.ttf) or OpenType (.otf) font".to_string()),
        })?;

        let (size, natural_height) = select_size(height_bound, |size| line_height(&font, size));
        let ascent = font
            .horizontal_line_metrics(size as f32)
            .map_or(size as f32, |m| m.ascent);
        let height = if fixed_height {
            height_bound
        } else {
            natural_height
        };

        Ok(Self {
            font,
            size,
            ascent,
            height: height.max(1),
        })
    }

    /// The pixel size chosen for the font.
    pub fn size(&self) -> u32 {
        self.size
    }
}

impl Rasterizer for FontRasterizer {
    fn rasterize(&self, ch: char, codes: &LevelCodes) -> Result<GrayImage> {
        if self.font.lookup_glyph_index(ch) == 0 {
            return Err(OsdError::Glyph {
                ch,
                message: "character is not in the font".to_string(),
            });
        }

        let (metrics, coverage) = self.font.rasterize(ch, self.size as f32);

        let ink_right = metrics.xmin.max(0) as usize + metrics.width;
        let width = (metrics.advance_width.ceil() as usize).max(ink_right).max(1);

        let fg = codes.code(Level::Foreground);
        let bg = codes.code(Level::Background);
        let mut bitmap = GrayImage::from_pixel(width as u32, self.height, Luma([bg]));

        // ymin is the distance from the baseline up to the bitmap's bottom row
        let baseline = self.ascent.round() as i64;
        let top = baseline - (metrics.ymin as i64 + metrics.height as i64);

        for (i, &value) in coverage.iter().enumerate() {
            if value < COVERAGE_THRESHOLD {
                continue;
            }
            let x = metrics.xmin as i64 + (i % metrics.width) as i64;
            let y = top + (i / metrics.width) as i64;
            if x >= 0 && y >= 0 && (x as u32) < bitmap.width() && (y as u32) < bitmap.height() {
                bitmap.put_pixel(x as u32, y as u32, Luma([fg]));
            }
        }

        Ok(bitmap)
    }

    fn line_height(&self) -> u32 {
        self.height
    }
}

/// Ascent-to-descent height of the font at `size` pixels.
fn line_height(font: &Font, size: u32) -> u32 {
    match font.horizontal_line_metrics(size as f32) {
        Some(metrics) => (metrics.ascent - metrics.descent).ceil() as u32,
        None => size,
    }
}
