use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string is not a `#rrggbb` colour.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorTagError {
    #[error("colour '{0}' must start with '#'")]
    MissingHash(String),

    #[error("colour '{0}' must have exactly six hex digits")]
    InvalidLength(String),

    #[error("colour '{0}' contains a non-hex digit")]
    InvalidDigit(String),
}

/// A 24-bit RGB colour, written as `#rrggbb`.
///
/// Colours travel with the data records (each pie slice and each alcohol
/// category carries its own), so the renderer never picks them itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorTag(u32);

impl ColorTag {
    pub const fn from_rgb(rgb: u32) -> Self {
        Self(rgb & 0x00ff_ffff)
    }

    pub const fn rgb(self) -> u32 {
        self.0
    }

    pub fn parse(s: &str) -> Result<Self, ColorTagError> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorTagError::MissingHash(s.to_string()))?;

        if digits.len() != 6 {
            return Err(ColorTagError::InvalidLength(s.to_string()));
        }

        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| ColorTagError::InvalidDigit(s.to_string()))
    }
}

impl fmt::Display for ColorTag {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl TryFrom<String> for ColorTag {
    type Error = ColorTagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ColorTag> for String {
    fn from(value: ColorTag) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_upper_and_lower_case() {
        assert_eq!(ColorTag::parse("#FFD700").unwrap().rgb(), 0xffd700);
        assert_eq!(ColorTag::parse("#8b0000").unwrap().rgb(), 0x8b0000);
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(ColorTag::parse("  #22c55e ").unwrap().rgb(), 0x22c55e);
    }

    #[test]
    fn parse_rejects_missing_hash() {
        assert_eq!(
            ColorTag::parse("ef4444"),
            Err(ColorTagError::MissingHash("ef4444".to_string()))
        );
    }

    #[test]
    fn parse_rejects_short_form() {
        assert_eq!(
            ColorTag::parse("#fff"),
            Err(ColorTagError::InvalidLength("#fff".to_string()))
        );
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert_eq!(
            ColorTag::parse("#zzzzzz"),
            Err(ColorTagError::InvalidDigit("#zzzzzz".to_string()))
        );
    }

    #[test]
    fn display_is_lowercase_six_digits() {
        assert_eq!(ColorTag::from_rgb(0x00_0a0b).to_string(), "#000a0b");
        assert_eq!(ColorTag::from_rgb(0xFFD700).to_string(), "#ffd700");
    }

    #[test]
    fn from_rgb_masks_alpha_bits() {
        assert_eq!(ColorTag::from_rgb(0xff3b82f6).rgb(), 0x3b82f6);
    }
}
