//! Pixel levels and their byte encoding.
//!
//! A level names the role a pixel plays in a glyph, not a brightness.
//! Raw 8-bit codes only exist at the edges of the pipeline: the bitmap a
//! rasterizer produces and any gray image handed back to a caller.

use std::fmt;

use image::{GrayImage, Luma};

use crate::error::{OsdError, Result};

use super::LevelImage;

/// The role of a pixel in a glyph bitmap.
///
/// Variant order is the palette order used when colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// Empty space around the glyph.
    Background,
    /// Outline or shadow pixels added by a decoration.
    Shade,
    /// Glyph ink.
    Foreground,
}

impl Level {
    /// All levels, in palette order.
    pub const ALL: [Level; 3] = [Level::Background, Level::Shade, Level::Foreground];

    /// Character used in the text form of a level image.
    pub const fn symbol(self) -> char {
        match self {
            Level::Background => '.',
            Level::Shade => '+',
            Level::Foreground => '#',
        }
    }

    /// Inverse of [`Level::symbol`].
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' => Some(Level::Background),
            '+' => Some(Level::Shade),
            '#' => Some(Level::Foreground),
            _ => None,
        }
    }

    /// Position of this level in [`Level::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Background => write!(f, "background"),
            Level::Shade => write!(f, "shade"),
            Level::Foreground => write!(f, "foreground"),
        }
    }
}

/// Fail unless the three roles handed to a decoration are pairwise distinct.
pub fn ensure_distinct(fg: Level, ol: Level, bg: Level) -> Result<()> {
    if fg == ol || ol == bg || fg == bg {
        return Err(OsdError::Level {
            message: format!(
                "decoration levels must be pairwise distinct (fg={}, shade={}, bg={})",
                fg, ol, bg
            ),
        });
    }
    Ok(())
}

/// Byte codes for the three levels in a raw gray bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCodes {
    fg: u8,
    shade: u8,
    bg: u8,
}

impl Default for LevelCodes {
    fn default() -> Self {
        Self {
            fg: 0,
            shade: 128,
            bg: 255,
        }
    }
}

impl LevelCodes {
    /// Create a code table. All three codes must differ.
    pub fn new(fg: u8, shade: u8, bg: u8) -> Result<Self> {
        if fg == shade || shade == bg || fg == bg {
            return Err(OsdError::Level {
                message: format!(
                    "level codes must be pairwise distinct (fg={}, shade={}, bg={})",
                    fg, shade, bg
                ),
            });
        }
        Ok(Self { fg, shade, bg })
    }

    /// The byte code of a level.
    pub fn code(&self, level: Level) -> u8 {
        match level {
            Level::Foreground => self.fg,
            Level::Shade => self.shade,
            Level::Background => self.bg,
        }
    }

    /// The level a byte code stands for, if any.
    pub fn level(&self, code: u8) -> Option<Level> {
        Level::ALL.into_iter().find(|&level| self.code(level) == code)
    }

    /// Decode a raw bitmap into levels. Unknown codes are rejected.
    pub fn decode(&self, raw: &GrayImage) -> Result<LevelImage> {
        let (width, height) = (raw.width() as usize, raw.height() as usize);
        let mut pixels = Vec::with_capacity(width * height);

        for (x, y, Luma([code])) in raw.enumerate_pixels() {
            let level = self.level(*code).ok_or_else(|| OsdError::Level {
                message: format!("unknown level code {} at ({}, {})", code, x, y),
            })?;
            pixels.push(level);
        }

        LevelImage::from_pixels(width, height, pixels)
    }

    /// Encode levels back into a raw bitmap.
    pub fn encode(&self, image: &LevelImage) -> GrayImage {
        GrayImage::from_fn(image.width() as u32, image.height() as u32, |x, y| {
            let level = image
                .get(x as usize, y as usize)
                .unwrap_or(Level::Background);
            Luma([self.code(level)])
        })
    }
}
