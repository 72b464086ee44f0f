//! Shade ramp derivation.
//!
//! A palette is ten shades (`50` lightest .. `900` darkest) derived from one
//! base color by shifting lightness and saturation while holding hue fixed,
//! so every rung stays visually related to the brand hue. The per-shade
//! offsets live in a fixed table: lighter shades get large lightness boosts
//! and desaturation, darker shades lose lightness and gain a little
//! saturation, approximating the perceptual curves of hand-tuned design
//! system ramps.
//!
//! The table is an ordered array rather than a map so iteration order is a
//! property of the data, not of any map implementation.

use crate::hex::HexColor;
use crate::hsl::{hex_to_hsl, hsl_to_hex, Hsl};
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

/// The ten shade tokens, in ramp order.
pub const SHADE_KEYS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Per-shade offsets applied to the base color's HSL value.
#[derive(Debug, Clone, Copy)]
pub struct ShadeDelta {
    /// Shade token (50..900).
    pub shade: u16,
    /// Added to base lightness percent.
    pub lightness: i16,
    /// Added to base saturation percent.
    pub saturation: i16,
}

const fn delta(shade: u16, lightness: i16, saturation: i16) -> ShadeDelta {
    ShadeDelta { shade, lightness, saturation }
}

/// The fixed delta table. These exact offsets are a compatibility constant:
/// palettes generated elsewhere from the same base must match byte for byte.
pub const SHADE_DELTAS: [ShadeDelta; 10] = [
    delta(50, 45, -20),
    delta(100, 40, -15),
    delta(200, 30, -10),
    delta(300, 20, -5),
    delta(400, 10, 0),
    delta(500, 0, 0),
    delta(600, -10, 0),
    delta(700, -20, 5),
    delta(800, -30, 10),
    delta(900, -40, 10),
];

/// Derived lightness stays inside [5,98], saturation inside [5,100]:
/// never fully black/white, never fully grey.
fn clamp(value: i16, min: i16, max: i16) -> u8 {
    value.clamp(min, max) as u8
}

/// A generated shade ramp: exactly ten `(shade, color)` entries in ramp
/// order. Serializes as an ordered shade→hex map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    shades: [(u16, HexColor); 10],
}

impl Palette {
    /// Look up one shade's color.
    pub fn get(&self, shade: u16) -> Option<&HexColor> {
        self.shades.iter().find(|(s, _)| *s == shade).map(|(_, c)| c)
    }

    /// The `500` entry: always exactly the normalized base color.
    pub fn base(&self) -> &HexColor {
        // 500 sits at index 5 of SHADE_DELTAS; the constructor preserves order.
        &self.shades[5].1
    }

    /// Iterate `(shade, color)` pairs from lightest (`50`) to darkest (`900`).
    pub fn iter(&self) -> impl Iterator<Item = (u16, &HexColor)> {
        self.shades.iter().map(|(s, c)| (*s, c))
    }

    pub fn len(&self) -> usize {
        self.shades.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Serialize for Palette {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.shades.len()))?;
        for (shade, color) in &self.shades {
            map.serialize_entry(&shade.to_string(), color)?;
        }
        map.end()
    }
}

/// Derive the ten-shade ramp for `base`.
///
/// Pure and deterministic: the same base always yields a bit-identical
/// palette. The zero-delta `500` shade is the base color itself, byte for
/// byte, rather than a re-quantized HSL round trip.
pub fn generate_palette(base: &HexColor) -> Palette {
    let Hsl { h, s, l } = hex_to_hsl(base);
    debug!(base = %base, h, s, l, "generating shade ramp");

    let shades = SHADE_DELTAS.map(|d| {
        let color = if d.lightness == 0 && d.saturation == 0 {
            base.clone()
        } else {
            hsl_to_hex(Hsl {
                h,
                s: clamp(i16::from(s) + d.saturation, 5, 100),
                l: clamp(i16::from(l) + d.lightness, 5, 98),
            })
        };
        (d.shade, color)
    });

    Palette { shades }
}
