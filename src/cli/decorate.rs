//! Decorate command implementation.
//!
//! Adds an outline or drop shadow to gray OSD bitmaps already on disk. Each
//! input is decoded with the given level codes, decorated, and saved under
//! the same file name in the output directory, in the format its extension
//! names.

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::decor::{Decorator, Effect};
use crate::error::{OsdError, Result};
use crate::output::{display_path, plural, Printer};

use super::render::create_dir;

/// Foreground code used by existing OSD bitmaps.
pub const DEFAULT_FG_CODE: u8 = 192;
/// Outline/shadow code used by existing OSD bitmaps.
pub const DEFAULT_OL_CODE: u8 = 64;
/// Background code used by existing OSD bitmaps.
pub const DEFAULT_BG_CODE: u8 = 0;

/// Decoration to apply to existing bitmaps
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecorEffect {
    /// One-pixel outline
    #[value(alias = "edge")]
    Outline,
    /// Shadow 1 pixel right, 1 pixel down
    Shadow11,
    /// Shadow 2 pixels right, 1 pixel down
    Shadow21,
}

impl From<DecorEffect> for Effect {
    fn from(effect: DecorEffect) -> Self {
        match effect {
            DecorEffect::Outline => Effect::Outline,
            DecorEffect::Shadow11 => Effect::SHADOW_11,
            DecorEffect::Shadow21 => Effect::SHADOW_21,
        }
    }
}

/// Decorate existing gray OSD bitmaps
#[derive(Args, Debug)]
pub struct DecorateArgs {
    /// Decoration to apply
    #[arg(value_enum)]
    pub effect: DecorEffect,

    /// Bitmaps to decorate (BMP, PNG, ...)
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Directory for the decorated bitmaps, created if missing
    #[arg(long, short = 'd', value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Gray code of foreground pixels
    #[arg(long, default_value_t = DEFAULT_FG_CODE)]
    pub fg: u8,

    /// Gray code written for outline and shadow pixels
    #[arg(long, default_value_t = DEFAULT_OL_CODE)]
    pub ol: u8,

    /// Gray code of background pixels
    #[arg(long, default_value_t = DEFAULT_BG_CODE)]
    pub bg: u8,
}

pub fn run(args: DecorateArgs, printer: &Printer) -> Result<()> {
    let decorator = Decorator::new(args.fg, args.ol, args.bg)?;
    let effect = Effect::from(args.effect);
    create_dir(&args.dir)?;

    let mut written = 0;
    let mut failed = 0;

    for file in &args.files {
        match decorate_file(&decorator, effect, file, &args.dir) {
            Ok(path) => {
                written += 1;
                printer.status(
                    "Decorating",
                    &format!("{} -> {}", display_path(file), display_path(&path)),
                );
            }
            Err(e) => {
                failed += 1;
                printer.warning("Skipped", &format!("{}: {}", display_path(file), e));
            }
        }
    }

    let done = plural(written, "bitmap", "bitmaps");
    if failed == 0 {
        printer.status(
            "Finished",
            &format!("{} ({}) in {}", done, effect, display_path(&args.dir)),
        );
        return Ok(());
    }

    let failed = plural(failed, "bitmap", "bitmaps");
    printer.error("Failed", &format!("{} failed, {} written", failed, done));
    Err(OsdError::Build {
        message: format!("{} could not be decorated", failed),
        help: Some("See the skipped files above".to_string()),
    })
}

/// Decorate one bitmap file and write the result into `dir`.
///
/// Returns the path written.
pub fn decorate_file(
    decorator: &Decorator,
    effect: Effect,
    input: &Path,
    dir: &Path,
) -> Result<PathBuf> {
    let name = input.file_name().ok_or_else(|| OsdError::Config {
        message: format!("not a file: {}", input.display()),
        help: None,
    })?;

    let raw = image::open(input)
        .map_err(|e| OsdError::Io {
            path: input.to_path_buf(),
            message: format!("Failed to read bitmap: {}", e),
        })?
        .to_luma8();

    let decorated = decorator.decorate_raw(&raw, effect)?;

    let output = dir.join(name);
    decorated.save(&output).map_err(|e| OsdError::Io {
        path: output.clone(),
        message: format!("Failed to write bitmap: {}", e),
    })?;

    Ok(output)
}
