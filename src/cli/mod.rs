pub mod completions;
pub mod decorate;
pub mod init;
pub mod name;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// osdfont - OSD glyph bitmap generator
#[derive(Parser, Debug)]
#[command(name = "osdfont")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Manifest to read settings from (default: ./osdfont.yaml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render glyphs in the foreground colour only
    Fore(render::GlyphArgs),

    /// Render glyphs with a one-pixel outline
    #[command(alias = "edge")]
    Outline(render::DecorArgs),

    /// Render glyphs with a drop shadow offset (1, 1)
    Shadow11(render::DecorArgs),

    /// Render glyphs with a drop shadow offset (2, 1)
    Shadow21(render::DecorArgs),

    /// Add an outline or shadow to existing gray bitmaps
    Decorate(decorate::DecorateArgs),

    /// Generate a filename list from a character list
    Name(name::NameArgs),

    /// Initialize an osdfont project (generates osdfont.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_edge_alias_parses_as_outline() {
        let cli = Cli::try_parse_from(["osdfont", "edge", "chars.txt", "-e", "red"]).unwrap();
        match cli.command {
            Commands::Outline(args) => {
                assert_eq!(args.glyph.chars, PathBuf::from("chars.txt"));
                assert_eq!(args.edge.as_deref(), Some("red"));
            }
            other => panic!("expected outline, got {:?}", other),
        }
    }

    #[test]
    fn test_shadow_commands() {
        let cli = Cli::try_parse_from(["osdfont", "shadow21", "chars.txt", "--opaque"]).unwrap();
        assert!(matches!(cli.command, Commands::Shadow21(ref args) if args.opaque));

        let cli = Cli::try_parse_from(["osdfont", "shadow11", "chars.txt"]).unwrap();
        assert!(matches!(cli.command, Commands::Shadow11(_)));
    }

    #[test]
    fn test_decorate_parses_effect_and_files() {
        let cli = Cli::try_parse_from([
            "osdfont", "decorate", "edge", "A.BMP", "B.BMP", "-d", "out", "--fg", "200",
        ])
        .unwrap();
        match cli.command {
            Commands::Decorate(args) => {
                assert_eq!(args.effect, decorate::DecorEffect::Outline);
                assert_eq!(args.files, vec![PathBuf::from("A.BMP"), PathBuf::from("B.BMP")]);
                assert_eq!(args.dir, PathBuf::from("out"));
                assert_eq!(args.fg, 200);
                assert_eq!(args.bg, decorate::DEFAULT_BG_CODE);
            }
            other => panic!("expected decorate, got {:?}", other),
        }

        assert!(Cli::try_parse_from(["osdfont", "decorate", "shadow21"]).is_err());
    }

    #[test]
    fn test_config_is_global() {
        let cli =
            Cli::try_parse_from(["osdfont", "fore", "chars.txt", "--config", "alt.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("alt.yaml")));
    }

    #[test]
    fn test_fore_rejects_edge_flag() {
        assert!(Cli::try_parse_from(["osdfont", "fore", "chars.txt", "-e", "red"]).is_err());
    }
}
