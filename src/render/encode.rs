//! PNG output for coloured glyphs.
//!
//! Glyphs are written palette-indexed by default so the index of each level
//! is fixed in the file, with a `tRNS` entry for the transparency key.
//! True-colour RGBA output is available for tools that cannot read palettes.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{OsdError, Result};

use super::IndexedImage;

/// How a glyph image is stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// 8-bit palette-indexed PNG.
    #[default]
    Indexed,
    /// 8-bit RGBA PNG.
    TrueColour,
}

/// Write a glyph in the given format.
pub fn write_glyph(image: &IndexedImage, path: &Path, format: OutputFormat) -> Result<()> {
    if image.width() == 0 || image.height() == 0 {
        return Err(OsdError::Io {
            path: path.to_path_buf(),
            message: format!(
                "cannot write an empty {}x{} image",
                image.width(),
                image.height()
            ),
        });
    }

    match format {
        OutputFormat::Indexed => write_indexed_png(image, path),
        OutputFormat::TrueColour => write_png(image, path),
    }
}

/// Write a palette-indexed PNG.
pub fn write_indexed_png(image: &IndexedImage, path: &Path) -> Result<()> {
    let io_error = |message: String| OsdError::Io {
        path: path.to_path_buf(),
        message,
    };

    let file = File::create(path).map_err(|e| io_error(format!("Failed to create PNG: {}", e)))?;

    let mut encoder = png::Encoder::new(
        BufWriter::new(file),
        image.width() as u32,
        image.height() as u32,
    );
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);

    let palette: Vec<u8> = image.palette().iter().flat_map(|c| c.to_rgb()).collect();
    encoder.set_palette(palette);

    if let Some(index) = image.transparent_index() {
        // tRNS only needs entries up to the last non-opaque index
        let trns: Vec<u8> = image.palette()[..=index as usize]
            .iter()
            .map(|c| c.a)
            .collect();
        encoder.set_trns(trns);
    }

    let mut writer = encoder
        .write_header()
        .map_err(|e| io_error(format!("Failed to write PNG header: {}", e)))?;
    writer
        .write_image_data(image.indices())
        .map_err(|e| io_error(format!("Failed to write PNG: {}", e)))?;
    writer
        .finish()
        .map_err(|e| io_error(format!("Failed to finish PNG: {}", e)))?;

    Ok(())
}

/// Write a true-colour RGBA PNG.
pub fn write_png(image: &IndexedImage, path: &Path) -> Result<()> {
    image.to_rgba_image().save(path).map_err(|e| OsdError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{apply_colours, ColourTable};
    use crate::types::{Colour, LevelImage};
    use tempfile::tempdir;

    fn coloured() -> IndexedImage {
        let image: LevelImage = "#+\n..".parse().unwrap();
        let table = ColourTable::osd(
            Colour::rgb(255, 0, 0),
            Colour::rgb(0, 255, 0),
            Colour::rgb(0, 0, 255),
        );
        apply_colours(&image, &table).unwrap()
    }

    #[test]
    fn test_write_indexed_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("glyph.png");

        write_glyph(&coloured(), &path, OutputFormat::Indexed).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [0, 255, 0, 255]);
        assert_eq!(img.get_pixel(0, 1).0, [0, 0, 255, 0]);
    }

    #[test]
    fn test_indexed_png_keeps_palette_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("palette.png");

        write_indexed_png(&coloured(), &path).unwrap();

        let decoder = png::Decoder::new(File::open(&path).unwrap());
        let reader = decoder.read_info().unwrap();
        let info = reader.info();

        assert_eq!(info.color_type, png::ColorType::Indexed);
        let palette = info.palette.as_deref().unwrap();
        assert_eq!(palette, &[0, 0, 255, 0, 255, 0, 255, 0, 0][..]);
        assert_eq!(info.trns.as_deref(), Some(&[0u8][..]));
    }

    #[test]
    fn test_write_true_colour_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rgba.png");

        write_glyph(&coloured(), &path, OutputFormat::TrueColour).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(1, 0).0, [0, 255, 0, 255]);
        assert_eq!(img.get_pixel(1, 1).0, [0, 0, 255, 0]);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("glyph.png");
        assert!(write_glyph(&coloured(), &path, OutputFormat::Indexed).is_err());
    }
}
