//! Glyph decoration.
//!
//! Turns a two-level glyph into an outlined or shadowed three-level image.
//! The algorithms work on [`Level`]s; [`Decorator`] owns the byte codes used
//! to get a raw rasterized bitmap into and out of that form.

mod composite;
mod outline;
mod shadow;

use std::fmt;

use image::GrayImage;

use crate::error::Result;
use crate::types::{Level, LevelCodes, LevelImage};

pub use composite::{composite, fg_mask};
pub use outline::find_outline;
pub use shadow::{add_outline, add_shadow};

/// A decoration applied to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Foreground only.
    None,
    /// One-pixel outline around the glyph.
    Outline,
    /// Drop-shadow offset right by `dx` and down by `dy`.
    Shadow { dx: usize, dy: usize },
}

impl Effect {
    /// Shadow 1 pixel right, 1 pixel down.
    pub const SHADOW_11: Effect = Effect::Shadow { dx: 1, dy: 1 };

    /// Shadow 2 pixels right, 1 pixel down.
    pub const SHADOW_21: Effect = Effect::Shadow { dx: 2, dy: 1 };

    /// Apply this effect to a level image.
    pub fn apply(self, image: &LevelImage) -> Result<LevelImage> {
        let (fg, ol, bg) = (Level::Foreground, Level::Shade, Level::Background);
        match self {
            Effect::None => Ok(image.clone()),
            Effect::Outline => add_outline(image, fg, ol, bg),
            Effect::Shadow { dx, dy } => add_shadow(image, fg, ol, bg, dx, dy),
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::None => write!(f, "fore"),
            Effect::Outline => write!(f, "outline"),
            Effect::Shadow { dx, dy } => write!(f, "shadow{}{}", dx, dy),
        }
    }
}

/// Decorates raw glyph bitmaps that use a fixed set of level codes.
#[derive(Debug, Clone, Copy)]
pub struct Decorator {
    codes: LevelCodes,
}

impl Default for Decorator {
    fn default() -> Self {
        Self::from_codes(LevelCodes::default())
    }
}

impl Decorator {
    /// Create a decorator for the given codes. Fails unless all three differ.
    pub fn new(fg: u8, ol: u8, bg: u8) -> Result<Self> {
        Ok(Self::from_codes(LevelCodes::new(fg, ol, bg)?))
    }

    /// Create a decorator from validated codes.
    pub fn from_codes(codes: LevelCodes) -> Self {
        Self { codes }
    }

    /// The codes this decorator reads and writes.
    pub fn codes(&self) -> &LevelCodes {
        &self.codes
    }

    /// Decode a raw bitmap and apply `effect` to it.
    pub fn decorate(&self, raw: &GrayImage, effect: Effect) -> Result<LevelImage> {
        let image = self.codes.decode(raw)?;
        effect.apply(&image)
    }

    /// Like [`Decorator::decorate`], but returns a raw bitmap in the same codes.
    pub fn decorate_raw(&self, raw: &GrayImage, effect: Effect) -> Result<GrayImage> {
        let decorated = self.decorate(raw, effect)?;
        Ok(self.codes.encode(&decorated))
    }
}
