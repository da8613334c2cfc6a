use miette::Diagnostic;
use thiserror::Error;

/// Main error type for osdfont operations
#[derive(Error, Diagnostic, Debug)]
pub enum OsdError {
    #[error("IO error: {0}")]
    #[diagnostic(code(osdfont::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(osdfont::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(osdfont::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(osdfont::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Level error: {message}")]
    #[diagnostic(code(osdfont::level))]
    Level { message: String },

    #[error("Glyph {ch:?}: {message}")]
    #[diagnostic(code(osdfont::glyph))]
    Glyph { ch: char, message: String },

    #[error("Build error: {message}")]
    #[diagnostic(code(osdfont::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl OsdError {
    /// Attach a character to an error raised while processing it.
    ///
    /// Errors that already name a glyph are returned unchanged.
    pub fn for_glyph(self, ch: char) -> Self {
        match self {
            OsdError::Glyph { .. } => self,
            other => OsdError::Glyph {
                ch,
                message: other.to_string(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, OsdError>;
