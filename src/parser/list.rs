//! Character-list and filename-list files.
//!
//! Both are UTF-8 text. Trailing whitespace is stripped from every line, and
//! blank lines, `#` comments and `:` section markers are skipped.

use std::fs;
use std::path::Path;

use crate::error::{OsdError, Result};

/// Read a file as UTF-8, dropping a leading byte-order mark.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| OsdError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;

    let text = String::from_utf8(bytes).map_err(|e| OsdError::Parse {
        message: format!("{} is not valid UTF-8: {}", path.display(), e),
        help: Some("Save list files as UTF-8".to_string()),
    })?;

    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

/// Lines that carry content.
fn content_lines(source: &str) -> impl Iterator<Item = &str> {
    source
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with(':'))
}

/// Every character of every content line, in order.
pub fn parse_char_list(source: &str) -> Vec<char> {
    content_lines(source).flat_map(str::chars).collect()
}

/// One filename per content line.
pub fn parse_filename_list(source: &str) -> Vec<String> {
    content_lines(source).map(str::to_string).collect()
}

/// Read a character-list file.
pub fn read_char_list(path: &Path) -> Result<Vec<char>> {
    Ok(parse_char_list(&read_text(path)?))
}

/// Read a filename-list file.
pub fn read_filename_list(path: &Path) -> Result<Vec<String>> {
    Ok(parse_filename_list(&read_text(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_char_list() {
        let source = "# digits\n:section\n012\n\nAb  \n x\n";
        assert_eq!(parse_char_list(source), vec!['0', '1', '2', 'A', 'b', ' ', 'x']);
    }

    #[test]
    fn test_hash_only_skipped_at_line_start() {
        assert_eq!(parse_char_list("a#\n#b"), vec!['a', '#']);
    }

    #[test]
    fn test_parse_filename_list() {
        let source = "# names\nCH_UPP_A.png\r\n:skip\nCH_NUM_1.png   \n\n";
        assert_eq!(parse_filename_list(source), vec!["CH_UPP_A.png", "CH_NUM_1.png"]);
    }

    #[test]
    fn test_read_strips_bom() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chars.txt");
        fs::write(&path, "\u{feff}AB\n").unwrap();

        assert_eq!(read_char_list(&path).unwrap(), vec!['A', 'B']);
    }

    #[test]
    fn test_read_rejects_non_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("utf16.txt");
        fs::write(&path, [0xFF, 0xFE, 0x41, 0x00]).unwrap();

        assert!(matches!(read_char_list(&path), Err(OsdError::Parse { .. })));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(
            read_filename_list(Path::new("/nonexistent/names.lst")),
            Err(OsdError::Io { .. })
        ));
    }
}
