//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::{OsdError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// CSS gray, the default shade colour.
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Parse a colour string.
    ///
    /// Accepts the hex forms of [`Colour::from_hex`], `rgb(r, g, b)`, and
    /// CSS/SVG colour names such as `white` or `gray`.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }

        let lower = s.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::from_rgb_function(s, args);
        }

        if let Some(named) = palette::named::from_str(&lower) {
            let (r, g, b) = named.into_components();
            return Ok(Self::rgb(r, g, b));
        }

        // Bare hex without the leading '#'
        Self::from_hex(s).map_err(|_| OsdError::Parse {
            message: format!("Unknown colour: {}", s),
            help: Some("Use a colour name, #RRGGBB, or rgb(r, g, b)".to_string()),
        })
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        let digits: Vec<char> = hex.chars().collect();

        match digits.len() {
            3 | 4 => {
                let mut nibbles = [0u8, 0, 0, 15];
                for (slot, &c) in nibbles.iter_mut().zip(&digits) {
                    *slot = parse_hex_digit(c)?;
                }
                let [r, g, b, a] = nibbles.map(|n| n << 4 | n);
                Ok(Self::new(r, g, b, a))
            }
            6 | 8 => {
                let mut bytes = [0u8, 0, 0, 255];
                for (slot, pair) in bytes.iter_mut().zip(digits.chunks(2)) {
                    *slot = (parse_hex_digit(pair[0])? << 4) | parse_hex_digit(pair[1])?;
                }
                let [r, g, b, a] = bytes;
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(OsdError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
            }),
        }
    }

    fn from_rgb_function(original: &str, args: &str) -> Result<Self> {
        let channels: Vec<&str> = args.split(',').map(str::trim).collect();
        if channels.len() != 3 {
            return Err(OsdError::Parse {
                message: format!("Invalid colour: {}", original),
                help: Some("rgb() takes exactly three channels".to_string()),
            });
        }

        let mut rgb = [0u8; 3];
        for (slot, channel) in rgb.iter_mut().zip(&channels) {
            *slot = channel.parse::<u8>().map_err(|_| OsdError::Parse {
                message: format!("Invalid colour channel '{}' in {}", channel, original),
                help: Some("Channels must be integers from 0 to 255".to_string()),
            })?;
        }

        Ok(Self::rgb(rgb[0], rgb[1], rgb[2]))
    }

    /// The same colour with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert to RGB tuple, dropping alpha.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Colour {
    type Err = OsdError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| OsdError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));

        let c = Colour::from_hex("#1a1a2e").unwrap();
        assert_eq!(c, Colour::rgb(0x1a, 0x1a, 0x2e));
    }

    #[test]
    fn test_from_hex_3digit() {
        let c = Colour::from_hex("#ABC").unwrap();
        assert_eq!(c, Colour::rgb(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_from_hex_alpha() {
        assert_eq!(Colour::from_hex("#FF000080").unwrap(), Colour::new(255, 0, 0, 128));
        assert_eq!(Colour::from_hex("#F008").unwrap(), Colour::new(255, 0, 0, 136));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("").is_err());
    }

    #[test]
    fn test_from_hex_rejects_signs() {
        assert!(Colour::from_hex("#+F00000").is_err());
        assert!(Colour::from_hex("#F0+0F0").is_err());
        assert!(Colour::from_hex("#-1-1-1").is_err());
        assert!(Colour::parse("+F0000").is_err());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(Colour::parse("white").unwrap(), Colour::WHITE);
        assert_eq!(Colour::parse("Black").unwrap(), Colour::BLACK);
        assert_eq!(Colour::parse("gray").unwrap(), Colour::GRAY);
        assert_eq!(Colour::parse("red").unwrap(), Colour::rgb(255, 0, 0));
    }

    #[test]
    fn test_parse_rgb_function() {
        assert_eq!(Colour::parse("rgb(1, 2, 3)").unwrap(), Colour::rgb(1, 2, 3));
        assert!(Colour::parse("rgb(1, 2)").is_err());
        assert!(Colour::parse("rgb(1, 2, 300)").is_err());
    }

    #[test]
    fn test_parse_bare_hex_and_unknown() {
        assert_eq!(Colour::parse("00ff00").unwrap(), Colour::rgb(0, 255, 0));
        assert!(Colour::parse("not-a-colour").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#FF0000");
        assert_eq!(format!("{}", Colour::new(255, 0, 0, 0)), "#FF000000");
    }
}
