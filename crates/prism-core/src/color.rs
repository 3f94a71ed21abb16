//! Hex color strings and normalized RGB channels.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated `#rrggbb` color, stored lowercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parses a color for `field`, rejecting anything but `#` followed by six hex digits.
    pub fn parse_for(field: &str, value: &str) -> Result<Self, ConfigError> {
        let trimmed = value.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or("");
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor {
                field: field.to_string(),
                value: value.to_string(),
            });
        }
        Ok(Self(format!("#{}", digits.to_ascii_lowercase())))
    }

    /// Wraps a built-in literal without re-validating it.
    pub(crate) fn from_literal(value: &'static str) -> Self {
        debug_assert!(Self::parse_for("literal", value).is_ok(), "bad color literal {value}");
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_rgb(&self) -> Rgb {
        // Validated on construction: always seven ASCII characters.
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        Rgb::from_bytes(channel(1), channel(3), channel(5))
    }
}

impl FromStr for HexColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_for("color", s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    pub fn to_hex(&self) -> HexColor {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        HexColor(format!(
            "#{:02x}{:02x}{:02x}",
            byte(self.r),
            byte(self.g),
            byte(self.b)
        ))
    }
}
