//! Glyph rasterization.
//!
//! A [`Rasterizer`] turns a character into a two-level gray bitmap using the
//! foreground and background codes it is given. The decoration pipeline only
//! relies on that contract; [`FontRasterizer`] implements it for TrueType and
//! OpenType fonts.

mod font;

use image::GrayImage;

use crate::error::Result;
use crate::types::LevelCodes;

pub use font::{select_size, FontRasterizer, MAX_FONT_SIZE, MIN_FONT_SIZE};

/// Source of two-level glyph bitmaps.
pub trait Rasterizer {
    /// Rasterize `ch` into a bitmap whose pixels are either the foreground or
    /// the background code of `codes`.
    ///
    /// Every bitmap from one rasterizer has the same height; widths vary per
    /// glyph.
    fn rasterize(&self, ch: char, codes: &LevelCodes) -> Result<GrayImage>;

    /// Height shared by every glyph bitmap.
    fn line_height(&self) -> u32;
}
