//! Outline and drop-shadow compositing.

use crate::error::Result;
use crate::types::{ensure_distinct, Level, LevelImage, Mask};

use super::composite::{composite, fg_mask};
use super::outline::find_outline;

/// Ring the foreground with a one-pixel band of `ol`.
///
/// Foreground pixels keep `fg`; background pixels touching the glyph become
/// `ol`; everything else is unchanged. The output has the input's size.
pub fn add_outline(image: &LevelImage, fg: Level, ol: Level, bg: Level) -> Result<LevelImage> {
    ensure_distinct(fg, ol, bg)?;

    let mut out = image.clone();

    // Re-assert every non-background pixel of the input
    let visible = image.select(|level| level != bg);
    composite(&mut out, image, &visible, (0, 0))?;

    let boundary = find_outline(image, fg, bg)?;
    let layer = LevelImage::from_mask(&boundary, ol, bg);
    composite(&mut out, &layer, &boundary, (0, 0))?;

    Ok(out)
}

/// Cast a drop-shadow of level `ol` towards the lower right.
///
/// The umbra is the glyph shifted one pixel right; the penumbra is the glyph
/// shifted by (`dx`, `dy`) and drawn over the umbra. The glyph itself is
/// drawn last, so shadow never covers ink. The canvas grows by (`dx`, `dy`)
/// while compositing and is cropped back to the input's size.
pub fn add_shadow(
    image: &LevelImage,
    fg: Level,
    ol: Level,
    bg: Level,
    dx: usize,
    dy: usize,
) -> Result<LevelImage> {
    ensure_distinct(fg, ol, bg)?;

    let (width, height) = image.size();
    let shadow = image.map(|level| if level == fg { ol } else { bg });
    let mask: Mask = fg_mask(image, fg);

    let mut canvas = LevelImage::filled(width + dx, height + dy, bg);
    composite(&mut canvas, &shadow, &mask, (1, 0))?; // umbra
    composite(&mut canvas, &shadow, &mask, (dx, dy))?; // penumbra
    composite(&mut canvas, image, &mask, (0, 0))?;

    Ok(canvas.crop(0, 0, width, height))
}
