//! Hex color validation and normalization.
//!
//! User-supplied color strings arrive in several spellings: with or without
//! a leading `#`, upper or lower case, 3-digit shorthand or full 6-digit
//! form. This module canonicalizes all of them to one representation —
//! uppercase, `#`-prefixed, 6-digit — carried by the [`HexColor`] newtype.
//!
//! `HexColor` can only be constructed through normalization, so every
//! downstream consumer (the HSL converter, the palette generator) receives
//! a value that is valid by construction and never re-validates.

use crate::error::ColorError;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize};

/// A canonical hex color: uppercase, `#`-prefixed, 6-digit (`#RRGGBB`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

/// Returns true iff `input`, after optionally stripping one leading `#`,
/// is exactly 3 or exactly 6 hexadecimal digits (case-insensitive).
pub fn is_valid_hex(input: &str) -> bool {
    let digits = input.strip_prefix('#').unwrap_or(input);
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Canonicalize a user-supplied hex string.
///
/// Strips the optional `#`, uppercases, expands 3-digit shorthand by
/// duplicating each digit (`F0A` → `FF00AA`), and re-prefixes `#`.
/// Returns `None` for anything [`is_valid_hex`] rejects; callers treating
/// user input should keep their last valid color on `None` rather than
/// surfacing an error.
pub fn normalize_hex(input: &str) -> Option<HexColor> {
    if !is_valid_hex(input) {
        return None;
    }
    let digits = input.strip_prefix('#').unwrap_or(input);

    let mut canonical = String::with_capacity(7);
    canonical.push('#');
    if digits.len() == 3 {
        for c in digits.chars() {
            let c = c.to_ascii_uppercase();
            canonical.push(c);
            canonical.push(c);
        }
    } else {
        canonical.extend(digits.chars().map(|c| c.to_ascii_uppercase()));
    }
    Some(HexColor(canonical))
}

impl HexColor {
    /// The canonical `#RRGGBB` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the three channel bytes.
    pub fn rgb(&self) -> (u8, u8, u8) {
        // Constructible only via normalize_hex, so the slices are always
        // two uppercase hex digits each.
        let byte = |range| u8::from_str_radix(&self.0[range], 16).unwrap_or(0);
        (byte(1..3), byte(3..5), byte(5..7))
    }

    /// Assemble a canonical color from channel bytes.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{r:02X}{g:02X}{b:02X}"))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_hex(s).ok_or_else(|| ColorError::InvalidHex(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
