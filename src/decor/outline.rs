//! Outline detection.
//!
//! Finds the pixels that sit just outside the foreground region. The image is
//! padded by one pixel of background first so that a glyph touching the canvas
//! edge is handled like any other.

use crate::error::{OsdError, Result};
use crate::types::{Level, LevelImage, Mask};

use super::composite::composite;

/// Mark the non-foreground pixels that touch the foreground.
///
/// Any level other than `fg` counts as not foreground. Touching is
/// 8-connected, so diagonal neighbours of foreground ink are marked too.
/// The result is a bare boundary; callers decide how to paint through it.
pub fn find_outline(image: &LevelImage, fg: Level, bg: Level) -> Result<Mask> {
    if fg == bg {
        return Err(OsdError::Level {
            message: format!("foreground and background are both {}", fg),
        });
    }

    let (width, height) = image.size();

    let mut padded = LevelImage::filled(width + 2, height + 2, bg);
    composite(&mut padded, image, &Mask::full(width, height), (1, 1))?;

    // Set where the pixel is NOT foreground
    let outside = padded.select(|level| level != fg);
    let edges = find_edges(&outside);

    Ok(edges.crop(1, 1, width, height))
}

/// 3x3 edge kernel (centre 8, neighbours -1) clamped to 0..255.
///
/// On a binary stencil this is non-zero exactly where a set pixel has at
/// least one clear pixel among its 8 neighbours.
fn find_edges(binary: &Mask) -> Mask {
    let (width, height) = binary.size();

    Mask::from_fn(width, height, |x, y| {
        if !binary.is_set(x, y) {
            return false;
        }
        neighbours(x, y, width, height).any(|(nx, ny)| !binary.is_set(nx, ny))
    })
}

/// In-bounds 8-neighbourhood of (`x`, `y`).
fn neighbours(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> impl Iterator<Item = (usize, usize)> {
    const DELTAS: [(isize, isize); 8] = [
        (-1, -1),
        (0, -1),
        (1, -1),
        (-1, 0),
        (1, 0),
        (-1, 1),
        (0, 1),
        (1, 1),
    ];

    DELTAS.into_iter().filter_map(move |(dx, dy)| {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < width && ny < height).then_some((nx, ny))
    })
}
