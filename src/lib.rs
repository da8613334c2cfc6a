//! osdfont - OSD glyph bitmap generator
//!
//! Rasterizes characters from a TrueType font into small bitmaps for
//! on-screen display hardware, optionally decorated with a one-pixel
//! outline or a drop shadow, and writes them as palette-indexed PNGs.

pub mod cli;
pub mod decor;
pub mod error;
pub mod manifest;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod raster;
pub mod render;
pub mod types;

pub use decor::{add_outline, add_shadow, find_outline, Decorator, Effect};
pub use error::{OsdError, Result};
pub use manifest::{Manifest, MANIFEST_FILENAME};
pub use pipeline::{BatchReport, GlyphJob, Pipeline};
pub use raster::{FontRasterizer, Rasterizer};
pub use render::{apply_colours, write_glyph, ColourTable, IndexedImage, OutputFormat};
pub use types::{Colour, Level, LevelCodes, LevelImage, Mask};
