//! Level images and binary masks.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{OsdError, Result};

use super::Level;

/// A grid of pixel levels (row-major, origin top-left).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelImage {
    width: usize,
    height: usize,
    pixels: Vec<Level>,
}

impl LevelImage {
    /// Create an image with every pixel set to `level`.
    pub fn filled(width: usize, height: usize, level: Level) -> Self {
        Self {
            width,
            height,
            pixels: vec![level; width * height],
        }
    }

    /// Create an image from a row-major pixel vector.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Level>) -> Result<Self> {
        if pixels.len() != width * height {
            return Err(OsdError::Level {
                message: format!(
                    "expected {} pixels for a {}x{} image, got {}",
                    width * height,
                    width,
                    height,
                    pixels.len()
                ),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Paint `on` where the mask is set and `off` elsewhere.
    pub fn from_mask(mask: &Mask, on: Level, off: Level) -> Self {
        Self {
            width: mask.width(),
            height: mask.height(),
            pixels: mask.bits.iter().map(|&set| if set { on } else { off }).collect(),
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: usize, y: usize) -> Option<Level> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Set a pixel. Out-of-range positions are ignored.
    pub fn set(&mut self, x: usize, y: usize, level: Level) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = level;
        }
    }

    /// Row-major pixel slice.
    pub fn pixels(&self) -> &[Level] {
        &self.pixels
    }

    /// Iterate over `(x, y, level)` in row-major order.
    pub fn enumerate(&self) -> impl Iterator<Item = (usize, usize, Level)> + '_ {
        let width = self.width.max(1);
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, &level)| (i % width, i / width, level))
    }

    /// Apply `f` to every pixel, producing a new image.
    pub fn map(&self, f: impl Fn(Level) -> Level) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&level| f(level)).collect(),
        }
    }

    /// Mask of the pixels for which `f` holds.
    pub fn select(&self, f: impl Fn(Level) -> bool) -> Mask {
        Mask {
            width: self.width,
            height: self.height,
            bits: self.pixels.iter().map(|&level| f(level)).collect(),
        }
    }

    /// Copy a `width`x`height` window starting at (`x`, `y`).
    ///
    /// The window is clipped to the image.
    pub fn crop(&self, x: usize, y: usize, width: usize, height: usize) -> Self {
        let width = width.min(self.width.saturating_sub(x));
        let height = height.min(self.height.saturating_sub(y));
        if width == 0 {
            return Self::filled(0, height, Level::Background);
        }

        let mut pixels = Vec::with_capacity(width * height);
        for row in y..y + height {
            let start = row * self.width + x;
            pixels.extend_from_slice(&self.pixels[start..start + width]);
        }

        Self {
            width,
            height,
            pixels,
        }
    }

    /// Distinct levels present, in palette order.
    pub fn levels(&self) -> BTreeSet<Level> {
        self.pixels.iter().copied().collect()
    }

    /// Count the pixels at `level`.
    pub fn count(&self, level: Level) -> usize {
        self.pixels.iter().filter(|&&l| l == level).count()
    }

    /// Positions of every pixel at `level`, row-major.
    pub fn positions(&self, level: Level) -> Vec<(usize, usize)> {
        self.enumerate()
            .filter(|&(_, _, l)| l == level)
            .map(|(x, y, _)| (x, y))
            .collect()
    }
}

impl FromStr for LevelImage {
    type Err = OsdError;

    /// Parse the text form: one row per line, `#` foreground, `+` shade,
    /// `.` background. Surrounding whitespace on each line is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut pixels = Vec::with_capacity(width * rows.len());

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(OsdError::Parse {
                    message: format!("row {} has a different width than row 0", y),
                    help: None,
                });
            }
            for c in row.chars() {
                let level = Level::from_symbol(c).ok_or_else(|| OsdError::Parse {
                    message: format!("unknown level symbol '{}' in row {}", c, y),
                    help: Some("Use '#' (foreground), '+' (shade) or '.' (background)".to_string()),
                })?;
                pixels.push(level);
            }
        }

        Self::from_pixels(width, rows.len(), pixels)
    }
}

impl fmt::Display for LevelImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for level in &self.pixels[y * self.width..(y + 1) * self.width] {
                write!(f, "{}", level.symbol())?;
            }
        }
        Ok(())
    }
}

/// A binary stencil. A set bit is the 255 of a mask image, a clear bit is 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl Mask {
    /// Create an empty (all-clear) mask.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width * height],
        }
    }

    /// Create a mask with every bit set.
    pub fn full(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: vec![true; width * height],
        }
    }

    /// Build a mask by evaluating `f(x, y)` for every position.
    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> bool) -> Self {
        let mut bits = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                bits.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            bits,
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Whether the bit at (`x`, `y`) is set. Out-of-range positions are clear.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.bits[y * self.width + x]
    }

    /// Number of set bits.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&set| set).count()
    }

    /// True when no bit is set.
    pub fn is_clear(&self) -> bool {
        !self.bits.contains(&true)
    }

    /// Copy a window, clipped to the mask.
    pub fn crop(&self, x: usize, y: usize, width: usize, height: usize) -> Self {
        let width = width.min(self.width.saturating_sub(x));
        let height = height.min(self.height.saturating_sub(y));
        Self::from_fn(width, height, |cx, cy| self.is_set(x + cx, y + cy))
    }

    /// Positions of set bits, row-major.
    pub fn positions(&self) -> Vec<(usize, usize)> {
        let width = self.width.max(1);
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &set)| set)
            .map(|(i, _)| (i % width, i / width))
            .collect()
    }
}
