//! Init command implementation.
//!
//! Generates an `osdfont.yaml` manifest holding the default render settings.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{OsdError, Result};
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, Printer};

use super::render::{DEFAULT_BACK, DEFAULT_DIR, DEFAULT_EDGE, DEFAULT_FONT, DEFAULT_FORE, DEFAULT_SIZE};

/// Initialize an osdfont project by generating an osdfont.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the manifest to (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Font file to record in the manifest
    #[arg(long, short = 'f', value_name = "FILE")]
    pub font: Option<PathBuf>,

    /// Overwrite existing osdfont.yaml
    #[arg(long)]
    pub force: bool,
}

/// The manifest `init` writes: every setting spelled out with its default.
pub fn default_manifest(font: Option<PathBuf>) -> Manifest {
    Manifest {
        font: Some(font.unwrap_or_else(|| PathBuf::from(DEFAULT_FONT))),
        size: Some(DEFAULT_SIZE),
        fixed_height: Some(false),
        output: Some(PathBuf::from(DEFAULT_DIR)),
        names: None,
        fore: Some(DEFAULT_FORE.to_string()),
        edge: Some(DEFAULT_EDGE.to_string()),
        back: Some(DEFAULT_BACK.to_string()),
        opaque: Some(false),
        true_colour: Some(false),
    }
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    // Check for existing manifest
    if manifest_path.exists() && !args.force {
        return Err(OsdError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let yaml = default_manifest(args.font).to_yaml()?;

    fs::write(&manifest_path, &yaml).map_err(|e| OsdError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.status("Created", &display_path(&manifest_path));

    Ok(())
}
