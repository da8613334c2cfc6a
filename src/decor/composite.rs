//! Stencil-limited compositing.

use crate::error::{OsdError, Result};
use crate::types::{Level, LevelImage, Mask};

/// Copy `src` onto `dst` at `offset` wherever `mask` is set.
///
/// `mask` must have the same dimensions as `src`. Destination positions that
/// fall outside `dst` are skipped; pixels where the mask is clear are left
/// untouched.
pub fn composite(
    dst: &mut LevelImage,
    src: &LevelImage,
    mask: &Mask,
    offset: (usize, usize),
) -> Result<()> {
    if src.size() != mask.size() {
        return Err(OsdError::Level {
            message: format!(
                "mask is {}x{} but source is {}x{}",
                mask.width(),
                mask.height(),
                src.width(),
                src.height()
            ),
        });
    }

    let (ox, oy) = offset;
    for (x, y, level) in src.enumerate() {
        if mask.is_set(x, y) {
            dst.set(x + ox, y + oy, level);
        }
    }

    Ok(())
}

/// Pixels at the foreground level.
pub fn fg_mask(image: &LevelImage, fg: Level) -> Mask {
    image.select(|level| level == fg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_respects_mask() {
        let mut dst = LevelImage::filled(3, 1, Level::Background);
        let src = LevelImage::filled(3, 1, Level::Shade);
        let mask = Mask::from_fn(3, 1, |x, _| x != 1);

        composite(&mut dst, &src, &mask, (0, 0)).unwrap();
        assert_eq!(dst.to_string(), "+.+");
    }

    #[test]
    fn test_composite_offset_clips() {
        let mut dst = LevelImage::filled(2, 2, Level::Background);
        let src = LevelImage::filled(2, 2, Level::Foreground);

        composite(&mut dst, &src, &Mask::full(2, 2), (1, 1)).unwrap();
        assert_eq!(dst.to_string(), "..\n.#");
    }

    #[test]
    fn test_composite_rejects_mismatched_mask() {
        let mut dst = LevelImage::filled(2, 2, Level::Background);
        let src = LevelImage::filled(2, 2, Level::Foreground);
        assert!(composite(&mut dst, &src, &Mask::full(1, 2), (0, 0)).is_err());
    }

    #[test]
    fn test_fg_mask() {
        let image: LevelImage = "#+\n.#".parse().unwrap();
        assert_eq!(fg_mask(&image, Level::Foreground).positions(), vec![(0, 0), (1, 1)]);
    }
}
