//! Quick color presets.
//!
//! Storefront branding panels offer a row of one-click starting colors next
//! to the free-form picker. A preset is just a label plus a hex string; the
//! values are opaque until they pass through the normalizer, and presets
//! that fail validation are skipped rather than surfaced as errors.

use crate::hex::{normalize_hex, HexColor};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A named starting color, as supplied by a caller or config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickColor {
    pub name: String,
    pub value: String,
}

impl QuickColor {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }

    /// Normalize this preset's value, if valid.
    pub fn color(&self) -> Option<HexColor> {
        normalize_hex(&self.value)
    }
}

/// Built-in defaults: common brand base hues at mid lightness, where the
/// shade ramp has the most room in both directions.
pub fn default_presets() -> Vec<QuickColor> {
    [
        ("Indigo", "#4F46E5"),
        ("Blue", "#1C7ED6"),
        ("Teal", "#0CA678"),
        ("Green", "#2F9E44"),
        ("Yellow", "#F59F00"),
        ("Orange", "#E8590C"),
        ("Red", "#E03131"),
        ("Pink", "#D6336C"),
        ("Violet", "#7048E8"),
        ("Gray", "#495057"),
    ]
    .into_iter()
    .map(|(name, value)| QuickColor::new(name, value))
    .collect()
}

/// Filter a preset list down to `(name, color)` pairs with valid values.
/// Invalid entries are logged and dropped, never fatal.
pub fn resolve(presets: &[QuickColor]) -> Vec<(String, HexColor)> {
    presets
        .iter()
        .filter_map(|preset| match preset.color() {
            Some(color) => Some((preset.name.clone(), color)),
            None => {
                warn!(name = %preset.name, value = %preset.value, "skipping invalid preset");
                None
            }
        })
        .collect()
}
