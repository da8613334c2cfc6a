//! Level-to-colour mapping.
//!
//! Each level is looked up directly in a [`ColourTable`]; no quantizer is
//! involved, so palette indices never depend on pixel statistics. Palette
//! entries follow [`Level`] order (background, shade, foreground) restricted
//! to the levels actually present.

use image::{Rgba, RgbaImage};

use crate::error::{OsdError, Result};
use crate::types::{Colour, Level, LevelImage};

/// Colour assignment for each level, plus an optional transparency key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColourTable {
    colours: [Option<Colour>; 3],
    transparent: Option<Level>,
}

impl ColourTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Foreground, shade and background colours with the background as the
    /// transparency key.
    pub fn osd(fore: Colour, shade: Colour, back: Colour) -> Self {
        Self::new()
            .with(Level::Foreground, fore)
            .with(Level::Shade, shade)
            .with(Level::Background, back)
            .with_transparent(Level::Background)
    }

    /// Assign a colour to a level. Alpha is taken from the transparency key,
    /// not from the colour.
    pub fn with(mut self, level: Level, colour: Colour) -> Self {
        self.colours[level.index()] = Some(colour.with_alpha(255));
        self
    }

    /// Mark a level as fully transparent in the output.
    pub fn with_transparent(mut self, level: Level) -> Self {
        self.transparent = Some(level);
        self
    }

    /// Drop the transparency key.
    pub fn opaque(mut self) -> Self {
        self.transparent = None;
        self
    }

    /// The transparency key, if any.
    pub fn transparent(&self) -> Option<Level> {
        self.transparent
    }

    /// The emitted colour for a level, with the transparency key applied.
    pub fn get(&self, level: Level) -> Option<Colour> {
        let colour = self.colours[level.index()]?;
        if self.transparent == Some(level) {
            Some(colour.with_alpha(0))
        } else {
            Some(colour)
        }
    }

    /// Map an RGBA image back to levels.
    ///
    /// Every pixel must equal the emitted colour of some level. When two
    /// levels share a colour, the first in palette order wins.
    pub fn recover(&self, image: &RgbaImage) -> Result<LevelImage> {
        let mut pixels = Vec::with_capacity(image.width() as usize * image.height() as usize);

        for (x, y, Rgba(rgba)) in image.enumerate_pixels() {
            let colour = Colour::new(rgba[0], rgba[1], rgba[2], rgba[3]);
            let level = Level::ALL
                .into_iter()
                .find(|&level| self.get(level) == Some(colour))
                .ok_or_else(|| OsdError::Parse {
                    message: format!("colour {} at ({}, {}) is not in the table", colour, x, y),
                    help: None,
                })?;
            pixels.push(level);
        }

        LevelImage::from_pixels(image.width() as usize, image.height() as usize, pixels)
    }
}

/// A palette-indexed image with one palette entry per level present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    width: usize,
    height: usize,
    palette: Vec<Colour>,
    indices: Vec<u8>,
    transparent: Option<u8>,
}

impl IndexedImage {
    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Palette entries in index order. The transparent entry has alpha 0.
    pub fn palette(&self) -> &[Colour] {
        &self.palette
    }

    /// Row-major palette indices.
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Index of the transparent palette entry, if any.
    pub fn transparent_index(&self) -> Option<u8> {
        self.transparent
    }

    /// Colour of the pixel at (`x`, `y`).
    pub fn get(&self, x: usize, y: usize) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = self.indices[y * self.width + x];
        self.palette.get(index as usize).copied()
    }

    /// Expand to a true-colour RGBA image.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let colour = self
                .get(x as usize, y as usize)
                .unwrap_or(Colour::TRANSPARENT);
            Rgba(colour.to_rgba())
        })
    }
}

/// Colour a level image from a table.
///
/// Fails if a level present in the image has no colour assigned.
pub fn apply_colours(image: &LevelImage, table: &ColourTable) -> Result<IndexedImage> {
    let present = image.levels();

    let mut palette = Vec::with_capacity(present.len());
    let mut index_of = [0u8; 3];
    let mut transparent = None;

    for level in present {
        let colour = table.get(level).ok_or_else(|| OsdError::Config {
            message: format!("no colour assigned to the {} level", level),
            help: Some("Every level in the decorated glyph needs a colour".to_string()),
        })?;

        let index = palette.len() as u8;
        if table.transparent() == Some(level) {
            transparent = Some(index);
        }
        index_of[level.index()] = index;
        palette.push(colour);
    }

    let indices = image
        .pixels()
        .iter()
        .map(|level| index_of[level.index()])
        .collect();

    Ok(IndexedImage {
        width: image.width(),
        height: image.height(),
        palette,
        indices,
        transparent,
    })
}
