//! Rendering module for osdfont.
//!
//! This module turns decorated level images into coloured, palette-indexed
//! glyphs and writes them to disk.

mod colourize;
mod encode;

pub use colourize::{apply_colours, ColourTable, IndexedImage};
pub use encode::{write_glyph, write_indexed_png, write_png, OutputFormat};
