//! Per-glyph render pipeline and batch driver.
//!
//! Each glyph goes rasterize → decorate → colour → write on its own; nothing
//! is shared between glyphs except the output directory. A failing glyph is
//! reported and the batch moves on to the next one.

use std::path::{Path, PathBuf};

use crate::decor::{Decorator, Effect};
use crate::error::{OsdError, Result};
use crate::raster::Rasterizer;
use crate::render::{apply_colours, write_glyph, ColourTable, IndexedImage, OutputFormat};

/// One glyph to render and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphJob {
    pub ch: char,
    pub path: PathBuf,
}

impl GlyphJob {
    /// Pair characters with filenames inside `dir`.
    ///
    /// The two lists must be the same length.
    pub fn pair(chars: &[char], filenames: &[String], dir: &Path) -> Result<Vec<GlyphJob>> {
        if chars.len() != filenames.len() {
            return Err(OsdError::Config {
                message: format!(
                    "{} characters but {} filenames",
                    chars.len(),
                    filenames.len()
                ),
                help: Some("Regenerate the filename list with `osdfont name`".to_string()),
            });
        }

        Ok(chars
            .iter()
            .zip(filenames)
            .map(|(&ch, name)| GlyphJob {
                ch,
                path: dir.join(name),
            })
            .collect())
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files written, in job order.
    pub written: Vec<PathBuf>,
    /// Jobs that failed, with their errors.
    pub failed: Vec<(GlyphJob, OsdError)>,
}

impl BatchReport {
    /// True when every job succeeded.
    pub fn is_ok(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Renders glyphs with one rasterizer, effect and colour table.
pub struct Pipeline<'a, R: Rasterizer> {
    rasterizer: &'a R,
    decorator: Decorator,
    effect: Effect,
    table: ColourTable,
    format: OutputFormat,
}

impl<'a, R: Rasterizer> Pipeline<'a, R> {
    /// Create a pipeline with default level codes and indexed output.
    pub fn new(rasterizer: &'a R, effect: Effect, table: ColourTable) -> Self {
        Self {
            rasterizer,
            decorator: Decorator::default(),
            effect,
            table,
            format: OutputFormat::default(),
        }
    }

    /// Set the output file format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// The effect this pipeline applies.
    pub fn effect(&self) -> Effect {
        self.effect
    }

    /// Render one glyph to a coloured image.
    pub fn render(&self, ch: char) -> Result<IndexedImage> {
        let raw = self
            .rasterizer
            .rasterize(ch, self.decorator.codes())
            .map_err(|e| e.for_glyph(ch))?;
        let decorated = self
            .decorator
            .decorate(&raw, self.effect)
            .map_err(|e| e.for_glyph(ch))?;
        apply_colours(&decorated, &self.table).map_err(|e| e.for_glyph(ch))
    }

    /// Render one glyph and write it to the job's path.
    pub fn write(&self, job: &GlyphJob) -> Result<()> {
        let image = self.render(job.ch)?;
        write_glyph(&image, &job.path, self.format).map_err(|e| e.for_glyph(job.ch))
    }

    /// Run every job, calling `on_result` after each one.
    ///
    /// Failures are collected, never propagated.
    pub fn run(
        &self,
        jobs: &[GlyphJob],
        mut on_result: impl FnMut(&GlyphJob, &Result<()>),
    ) -> BatchReport {
        let mut report = BatchReport::default();

        for job in jobs {
            let result = self.write(job);
            on_result(job, &result);
            match result {
                Ok(()) => report.written.push(job.path.clone()),
                Err(e) => report.failed.push((job.clone(), e)),
            }
        }

        report
    }
}
