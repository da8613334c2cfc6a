//! Input file parsing for osdfont.
//!
//! Character lists name the glyphs to render; filename lists (or names
//! derived from the characters) say where each one goes.

mod list;
mod names;

pub use list::{
    parse_char_list, parse_filename_list, read_char_list, read_filename_list, read_text,
};
pub use names::{filenames_for, glyph_name, symbol_name};
