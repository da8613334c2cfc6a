//! Name command implementation.
//!
//! Writes a filename-list file for a character list, one derived PNG name
//! per character, so the names can be reviewed or edited before rendering.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{OsdError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::{filenames_for, read_char_list};

/// Generate a filename-list file from a character-list file
#[derive(Args, Debug)]
pub struct NameArgs {
    /// Character-list file
    #[arg(value_name = "CHAR_LIST")]
    pub chars: PathBuf,

    /// File to write the filename list to
    #[arg(long, short = 'o', value_name = "FILE", default_value = "filename.lst")]
    pub outfile: PathBuf,
}

pub fn run(args: NameArgs, printer: &Printer) -> Result<()> {
    let chars = read_char_list(&args.chars)?;
    let names = filenames_for(&chars);

    fs::write(&args.outfile, names.join("\n")).map_err(|e| OsdError::Io {
        path: args.outfile.clone(),
        message: format!("Failed to write filename list: {}", e),
    })?;

    printer.status(
        "Created",
        &format!(
            "{} ({})",
            display_path(&args.outfile),
            plural(names.len(), "name", "names")
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::read_filename_list;
    use tempfile::tempdir;

    #[test]
    fn test_name_writes_list() {
        let dir = tempdir().unwrap();
        let chars = dir.path().join("chars.txt");
        fs::write(&chars, ":digits\n1\n:letters\naZ ~\n").unwrap();
        let outfile = dir.path().join("filename.lst");

        run(
            NameArgs {
                chars,
                outfile: outfile.clone(),
            },
            &Printer::new(),
        )
        .unwrap();

        assert_eq!(
            read_filename_list(&outfile).unwrap(),
            vec![
                "CH_NUM_1.png",
                "CH_LOW_a.png",
                "CH_UPP_Z.png",
                "CH_SYM_space.png",
                "CH_SYM_tilde.png",
            ]
        );
    }

    #[test]
    fn test_name_missing_char_list() {
        let dir = tempdir().unwrap();
        let args = NameArgs {
            chars: dir.path().join("missing.txt"),
            outfile: dir.path().join("filename.lst"),
        };
        assert!(run(args, &Printer::new()).is_err());
    }
}
