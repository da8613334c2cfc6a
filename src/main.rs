use std::path::Path;

use clap::Parser;
use miette::Result;
use osdfont::cli::{Cli, Commands};
use osdfont::decor::Effect;
use osdfont::output::Printer;
use osdfont::Manifest;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();
    let manifest = || Manifest::discover(cli.config.as_deref(), Path::new("."));

    match cli.command {
        Commands::Fore(args) => osdfont::cli::render::run_fore(args, &manifest()?, &printer)?,
        Commands::Outline(args) => {
            osdfont::cli::render::run_decor(Effect::Outline, args, &manifest()?, &printer)?
        }
        Commands::Shadow11(args) => {
            osdfont::cli::render::run_decor(Effect::SHADOW_11, args, &manifest()?, &printer)?
        }
        Commands::Shadow21(args) => {
            osdfont::cli::render::run_decor(Effect::SHADOW_21, args, &manifest()?, &printer)?
        }
        Commands::Decorate(args) => osdfont::cli::decorate::run(args, &printer)?,
        Commands::Name(args) => osdfont::cli::name::run(args, &printer)?,
        Commands::Init(args) => osdfont::cli::init::run(args, &printer)?,
        Commands::Completions(args) => osdfont::cli::completions::run(args)?,
    }

    Ok(())
}
