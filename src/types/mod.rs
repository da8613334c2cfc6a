//! Core domain types for osdfont.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGBA colour values
//! - `Level` / `LevelCodes` - pixel roles and their byte encoding
//! - `LevelImage` / `Mask` - level grids and compositing stencils

mod colour;
mod grid;
mod level;

pub use colour::Colour;
pub use grid::{LevelImage, Mask};
pub use level::{ensure_distinct, Level, LevelCodes};
