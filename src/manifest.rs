//! Project manifest (osdfont.yaml) parsing.
//!
//! The manifest holds default render settings for a project so command lines
//! only need to name the character list. Flags given on the command line
//! always win over manifest values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OsdError, Result};

/// Default manifest filename, looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "osdfont.yaml";

/// Project manifest loaded from osdfont.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Font file to rasterize from.
    pub font: Option<PathBuf>,

    /// Glyph height bound in pixels.
    pub size: Option<u32>,

    /// Make every glyph exactly `size` pixels tall.
    pub fixed_height: Option<bool>,

    /// Output directory for glyph images.
    pub output: Option<PathBuf>,

    /// Filename-list file.
    pub names: Option<PathBuf>,

    /// Foreground colour.
    pub fore: Option<String>,

    /// Outline/shadow colour.
    pub edge: Option<String>,

    /// Background colour.
    pub back: Option<String>,

    /// Keep the background opaque instead of transparent.
    pub opaque: Option<bool>,

    /// Write RGBA images instead of palette-indexed ones.
    pub true_colour: Option<bool>,
}

impl Manifest {
    /// Load manifest from an osdfont.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| OsdError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| OsdError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }

    /// Load an explicit manifest, or the one in `dir` if it exists.
    ///
    /// A missing default manifest is not an error; a missing explicit one is.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = dir.join(MANIFEST_FILENAME);
        if default_path.is_file() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Render the manifest as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| OsdError::Build {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("size: 24").unwrap();

        assert_eq!(manifest.size, Some(24));
        assert!(manifest.font.is_none());
        assert!(manifest.output.is_none());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r##"
font: fonts/osd.ttf
size: 18
fixed_height: true
output: build/glyphs
names: filename.lst
fore: white
edge: "#404040"
back: black
opaque: false
true_colour: true
"##;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.font, Some(PathBuf::from("fonts/osd.ttf")));
        assert_eq!(manifest.size, Some(18));
        assert_eq!(manifest.fixed_height, Some(true));
        assert_eq!(manifest.output, Some(PathBuf::from("build/glyphs")));
        assert_eq!(manifest.names, Some(PathBuf::from("filename.lst")));
        assert_eq!(manifest.fore.as_deref(), Some("white"));
        assert_eq!(manifest.edge.as_deref(), Some("#404040"));
        assert_eq!(manifest.back.as_deref(), Some("black"));
        assert_eq!(manifest.opaque, Some(false));
        assert_eq!(manifest.true_colour, Some(true));
    }

    #[test]
    fn test_parse_empty_manifest() {
        assert_eq!(Manifest::parse("").unwrap(), Manifest::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Manifest::parse("colour: red").is_err());
    }

    #[test]
    fn test_discover_default_and_missing() {
        let dir = tempdir().unwrap();
        assert_eq!(Manifest::discover(None, dir.path()).unwrap(), Manifest::default());

        std::fs::write(dir.path().join(MANIFEST_FILENAME), "size: 30\n").unwrap();
        assert_eq!(Manifest::discover(None, dir.path()).unwrap().size, Some(30));

        let explicit = dir.path().join("other.yaml");
        assert!(Manifest::discover(Some(&explicit), dir.path()).is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let manifest = Manifest {
            size: Some(12),
            fore: Some("yellow".to_string()),
            ..Default::default()
        };
        let yaml = manifest.to_yaml().unwrap();
        assert_eq!(Manifest::parse(&yaml).unwrap(), manifest);
    }
}
