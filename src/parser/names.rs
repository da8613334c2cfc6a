//! Output filename derivation.
//!
//! Names are safe on case-insensitive filesystems: letters carry their case
//! in a prefix and punctuation is spelled out.

/// Spelled-out names for ASCII punctuation and space.
const SYMBOL_NAMES: [(char, &str); 33] = [
    (' ', "space"),
    ('!', "exclam"),
    ('"', "dquotes"),
    ('#', "sharp"),
    ('$', "dollar"),
    ('%', "percent"),
    ('&', "ampersand"),
    ('\'', "quote"),
    ('(', "LParenthesis"),
    (')', "RParenthesis"),
    ('*', "asterisk"),
    ('+', "plus"),
    (',', "comma"),
    ('-', "minus"),
    ('.', "period"),
    ('/', "slash"),
    (':', "colon"),
    (';', "semicolon"),
    ('<', "less"),
    ('=', "equal"),
    ('>', "greater"),
    ('?', "question"),
    ('@', "at"),
    ('[', "LBracket"),
    ('\\', "backslash"),
    (']', "RBracket"),
    ('^', "caret"),
    ('_', "underscore"),
    ('`', "grave"),
    ('{', "LBrace"),
    ('|', "pipe"),
    ('}', "RBrace"),
    ('~', "tilde"),
];

/// Name of a character that cannot appear in a filename on every platform.
///
/// Characters without a name are returned as-is.
pub fn symbol_name(ch: char) -> String {
    SYMBOL_NAMES
        .iter()
        .find(|(symbol, _)| *symbol == ch)
        .map_or_else(|| ch.to_string(), |(_, name)| (*name).to_string())
}

/// Base filename (no extension) for a character.
pub fn glyph_name(ch: char) -> String {
    let tagged = if ch.is_lowercase() {
        format!("LOW_{}", ch)
    } else if ch.is_uppercase() {
        format!("UPP_{}", ch)
    } else if ch.is_numeric() {
        format!("NUM_{}", ch)
    } else {
        format!("SYM_{}", symbol_name(ch))
    };
    format!("CH_{}", tagged)
}

/// PNG filenames for a list of characters.
pub fn filenames_for(chars: &[char]) -> Vec<String> {
    chars.iter().map(|&ch| format!("{}.png", glyph_name(ch))).collect()
}
