//! Glyph rendering commands (`fore`, `outline`, `shadow11`, `shadow21`).
//!
//! Every setting is resolved and checked before the first glyph is drawn.
//! After that, a failing glyph is reported and skipped; the command still
//! exits with an error if any glyph failed.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::decor::Effect;
use crate::error::{OsdError, Result};
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::parser::{filenames_for, read_char_list, read_filename_list};
use crate::pipeline::{BatchReport, GlyphJob, Pipeline};
use crate::raster::{FontRasterizer, Rasterizer, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::render::{ColourTable, OutputFormat};
use crate::types::{Colour, Level};

pub const DEFAULT_FONT: &str = "arial.ttf";
pub const DEFAULT_SIZE: u32 = 40;
pub const DEFAULT_DIR: &str = "out";
pub const DEFAULT_FORE: &str = "white";
pub const DEFAULT_EDGE: &str = "gray";
pub const DEFAULT_BACK: &str = "black";

/// Options shared by every rendering command
#[derive(Args, Debug, Clone)]
pub struct GlyphArgs {
    /// Character-list file
    #[arg(value_name = "CHAR_LIST")]
    pub chars: PathBuf,

    /// Filename-list file (derived from the characters when omitted)
    #[arg(long, short = 'n', value_name = "FILE")]
    pub names: Option<PathBuf>,

    /// Output directory, created if missing [default: out]
    #[arg(long, short = 'd', value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// TrueType/OpenType font file [default: arial.ttf]
    #[arg(long, short = 'f', value_name = "FILE")]
    pub font: Option<PathBuf>,

    /// Upper bound of the glyph height in pixels (7-100) [default: 40]
    #[arg(long, short = 's')]
    pub size: Option<u32>,

    /// Make every glyph exactly --size pixels tall
    #[arg(long)]
    pub fixed_height: bool,

    /// Foreground colour [default: white]
    #[arg(long, short = 'c', value_name = "COLOUR")]
    pub fore: Option<String>,

    /// Write RGBA PNGs instead of palette-indexed ones
    #[arg(long)]
    pub true_colour: bool,
}

/// Options for the outline and shadow commands
#[derive(Args, Debug, Clone)]
pub struct DecorArgs {
    #[command(flatten)]
    pub glyph: GlyphArgs,

    /// Outline/shadow colour [default: gray]
    #[arg(long, short = 'e', value_name = "COLOUR")]
    pub edge: Option<String>,

    /// Background colour [default: black]
    #[arg(long, short = 'b', value_name = "COLOUR")]
    pub back: Option<String>,

    /// Keep the background opaque instead of making it transparent
    #[arg(long)]
    pub opaque: bool,
}

/// Fully resolved settings for one rendering run.
#[derive(Debug)]
pub struct RenderSettings {
    pub jobs: Vec<GlyphJob>,
    pub dir: PathBuf,
    pub font: PathBuf,
    pub size: u32,
    pub fixed_height: bool,
    pub table: ColourTable,
    pub format: OutputFormat,
}

impl RenderSettings {
    /// Settings for the foreground-only command.
    pub fn for_fore(args: &GlyphArgs, manifest: &Manifest) -> Result<Self> {
        let fore = resolve_colour(args.fore.as_deref(), manifest.fore.as_deref(), DEFAULT_FORE)?;
        let table = ColourTable::new()
            .with(Level::Foreground, fore)
            .with(Level::Background, Colour::TRANSPARENT)
            .with_transparent(Level::Background);

        Self::resolve(args, manifest, table)
    }

    /// Settings for the outline and shadow commands.
    pub fn for_decor(args: &DecorArgs, manifest: &Manifest) -> Result<Self> {
        let fore = resolve_colour(
            args.glyph.fore.as_deref(),
            manifest.fore.as_deref(),
            DEFAULT_FORE,
        )?;
        let edge = resolve_colour(args.edge.as_deref(), manifest.edge.as_deref(), DEFAULT_EDGE)?;
        let back = resolve_colour(args.back.as_deref(), manifest.back.as_deref(), DEFAULT_BACK)?;

        let mut table = ColourTable::osd(fore, edge, back);
        if args.opaque || manifest.opaque.unwrap_or(false) {
            table = table.opaque();
        }

        Self::resolve(&args.glyph, manifest, table)
    }

    fn resolve(args: &GlyphArgs, manifest: &Manifest, table: ColourTable) -> Result<Self> {
        let size = args.size.or(manifest.size).unwrap_or(DEFAULT_SIZE);
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) {
            return Err(OsdError::Config {
                message: format!("font size {} is out of range", size),
                help: Some(format!(
                    "Use a size from {} to {}",
                    MIN_FONT_SIZE, MAX_FONT_SIZE
                )),
            });
        }

        let font = args
            .font
            .clone()
            .or_else(|| manifest.font.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FONT));
        if !font.is_file() {
            return Err(OsdError::Config {
                message: format!("font file not found: {}", font.display()),
                help: Some("Pass a font with --font or set `font` in osdfont.yaml".to_string()),
            });
        }

        let chars = read_char_list(&args.chars)?;
        let filenames = match args.names.as_ref().or(manifest.names.as_ref()) {
            Some(path) => read_filename_list(path)?,
            None => filenames_for(&chars),
        };

        let dir = args
            .dir
            .clone()
            .or_else(|| manifest.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR));
        let jobs = GlyphJob::pair(&chars, &filenames, &dir)?;

        let format = if args.true_colour || manifest.true_colour.unwrap_or(false) {
            OutputFormat::TrueColour
        } else {
            OutputFormat::Indexed
        };

        Ok(Self {
            jobs,
            dir,
            font,
            size,
            fixed_height: args.fixed_height || manifest.fixed_height.unwrap_or(false),
            table,
            format,
        })
    }
}

/// Run the foreground-only command.
pub fn run_fore(args: GlyphArgs, manifest: &Manifest, printer: &Printer) -> Result<()> {
    let settings = RenderSettings::for_fore(&args, manifest)?;
    render(Effect::None, settings, printer)
}

/// Run an outline or shadow command.
pub fn run_decor(
    effect: Effect,
    args: DecorArgs,
    manifest: &Manifest,
    printer: &Printer,
) -> Result<()> {
    let settings = RenderSettings::for_decor(&args, manifest)?;
    render(effect, settings, printer)
}

fn render(effect: Effect, settings: RenderSettings, printer: &Printer) -> Result<()> {
    create_dir(&settings.dir)?;

    let rasterizer = FontRasterizer::load(&settings.font, settings.size, settings.fixed_height)?;
    printer.info(
        "Loaded",
        &format!(
            "{} at {}px ({}px tall)",
            display_path(&settings.font),
            rasterizer.size(),
            rasterizer.line_height()
        ),
    );

    let pipeline = Pipeline::new(&rasterizer, effect, settings.table).with_format(settings.format);
    let report = pipeline.run(&settings.jobs, |job, result| match result {
        Ok(()) => printer.status(
            "Rendering",
            &format!("{:?} -> {}", job.ch, display_path(&job.path)),
        ),
        Err(e) => printer.warning("Skipped", &e.to_string()),
    });

    summarize(pipeline.effect(), &settings.dir, &report, printer)
}

fn summarize(effect: Effect, dir: &Path, report: &BatchReport, printer: &Printer) -> Result<()> {
    let written = plural(report.written.len(), "glyph", "glyphs");

    if report.is_ok() {
        printer.status(
            "Finished",
            &format!("{} ({}) in {}", written, effect, display_path(dir)),
        );
        return Ok(());
    }

    let failed = plural(report.failed.len(), "glyph", "glyphs");
    printer.error("Failed", &format!("{} failed, {} written", failed, written));

    Err(OsdError::Build {
        message: format!("{} could not be rendered", failed),
        help: Some("See the skipped glyphs above".to_string()),
    })
}

fn resolve_colour(flag: Option<&str>, manifest: Option<&str>, default: &str) -> Result<Colour> {
    Colour::parse(flag.or(manifest).unwrap_or(default))
}

pub(super) fn create_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| OsdError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn glyph_args(dir: &Path) -> GlyphArgs {
        let chars = dir.join("chars.txt");
        fs::write(&chars, "# test\nAb\n").unwrap();
        let font = dir.join("font.ttf");
        fs::write(&font, b"not checked until rendering").unwrap();

        GlyphArgs {
            chars,
            names: None,
            dir: Some(dir.join("out")),
            font: Some(font),
            size: None,
            fixed_height: false,
            fore: None,
            true_colour: false,
        }
    }

    fn decor_args(dir: &Path) -> DecorArgs {
        DecorArgs {
            glyph: glyph_args(dir),
            edge: None,
            back: None,
            opaque: false,
        }
    }

    #[test]
    fn test_defaults_resolve() {
        let dir = tempdir().unwrap();
        let settings = RenderSettings::for_decor(&decor_args(dir.path()), &Manifest::default())
            .unwrap();

        assert_eq!(settings.size, DEFAULT_SIZE);
        assert_eq!(settings.format, OutputFormat::Indexed);
        assert_eq!(settings.table.get(Level::Foreground), Some(Colour::WHITE));
        assert_eq!(settings.table.get(Level::Shade), Some(Colour::GRAY));
        assert_eq!(settings.table.get(Level::Background), Some(Colour::TRANSPARENT));
        assert_eq!(
            settings.jobs,
            vec![
                GlyphJob {
                    ch: 'A',
                    path: dir.path().join("out").join("CH_UPP_A.png"),
                },
                GlyphJob {
                    ch: 'b',
                    path: dir.path().join("out").join("CH_LOW_b.png"),
                },
            ]
        );
    }

    #[test]
    fn test_flags_override_manifest() {
        let dir = tempdir().unwrap();
        let mut args = decor_args(dir.path());
        args.edge = Some("red".to_string());
        args.glyph.size = Some(20);

        let manifest = Manifest {
            size: Some(30),
            edge: Some("blue".to_string()),
            back: Some("#123456".to_string()),
            opaque: Some(true),
            true_colour: Some(true),
            ..Default::default()
        };
        let settings = RenderSettings::for_decor(&args, &manifest).unwrap();

        assert_eq!(settings.size, 20);
        assert_eq!(settings.table.get(Level::Shade), Some(Colour::rgb(255, 0, 0)));
        assert_eq!(
            settings.table.get(Level::Background),
            Some(Colour::rgb(0x12, 0x34, 0x56))
        );
        assert_eq!(settings.format, OutputFormat::TrueColour);
    }

    #[test]
    fn test_size_out_of_range() {
        let dir = tempdir().unwrap();
        let mut args = glyph_args(dir.path());
        args.size = Some(101);

        let result = RenderSettings::for_fore(&args, &Manifest::default());
        assert!(matches!(result, Err(OsdError::Config { .. })));
    }

    #[test]
    fn test_bad_colour_rejected_before_rendering() {
        let dir = tempdir().unwrap();
        let mut args = glyph_args(dir.path());
        args.fore = Some("nope".to_string());

        assert!(RenderSettings::for_fore(&args, &Manifest::default()).is_err());
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_missing_font() {
        let dir = tempdir().unwrap();
        let mut args = glyph_args(dir.path());
        args.font = Some(dir.path().join("missing.ttf"));

        let result = RenderSettings::for_fore(&args, &Manifest::default());
        assert!(matches!(result, Err(OsdError::Config { .. })));
    }

    #[test]
    fn test_names_file_must_match_chars() {
        let dir = tempdir().unwrap();
        let mut args = glyph_args(dir.path());
        let names = dir.path().join("filename.lst");
        fs::write(&names, "only-one.png\n").unwrap();
        args.names = Some(names);

        let result = RenderSettings::for_fore(&args, &Manifest::default());
        assert!(matches!(result, Err(OsdError::Config { .. })));
    }

    #[test]
    fn test_fore_background_is_transparent() {
        let dir = tempdir().unwrap();
        let settings =
            RenderSettings::for_fore(&glyph_args(dir.path()), &Manifest::default()).unwrap();

        assert_eq!(settings.table.get(Level::Shade), None);
        assert_eq!(settings.table.transparent(), Some(Level::Background));
    }

    #[test]
    fn test_invalid_font_fails_before_any_glyph() {
        let dir = tempdir().unwrap();
        let args = decor_args(dir.path());

        let result = run_decor(Effect::Outline, args, &Manifest::default(), &Printer::new());
        assert!(matches!(result, Err(OsdError::Config { .. })));
        assert_eq!(fs::read_dir(dir.path().join("out")).unwrap().count(), 0);
    }

    #[test]
    fn test_shadow_run_with_real_font() {
        let dir = tempdir().unwrap();
        let mut args = decor_args(dir.path());
        args.glyph.font = Some(
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("tests")
                .join("fixtures")
                .join("DejaVuSansMono.ttf"),
        );
        args.glyph.size = Some(16);

        run_decor(Effect::SHADOW_21, args, &Manifest::default(), &Printer::new()).unwrap();

        let a = image::open(dir.path().join("out").join("CH_UPP_A.png"))
            .unwrap()
            .to_rgba8();
        let b = image::open(dir.path().join("out").join("CH_LOW_b.png"))
            .unwrap()
            .to_rgba8();
        assert_eq!(a.height(), b.height());
        assert!(a.height() <= 16);

        let colours: std::collections::BTreeSet<[u8; 4]> = a.pixels().map(|p| p.0).collect();
        assert!(colours.contains(&[255, 255, 255, 255]));
        assert!(colours.contains(&[128, 128, 128, 255]));
        assert!(colours.contains(&[0, 0, 0, 0]));
    }
}
