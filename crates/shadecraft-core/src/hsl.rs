//! Hex ↔ HSL conversion.
//!
//! HSL is the working space for shade derivation: hue carries the brand
//! identity while lightness and saturation are what a ramp varies. Values
//! here are integer degrees and percents, the precision the palette math
//! needs, so a hex → HSL → hex round trip usually drifts by at most one
//! channel unit and by a few units at quantization extremes (one percent
//! of lightness spans ~2.5 channel units). That is an accepted lossy
//! property, not a bug.
//!
//! Rounding is half-away-from-zero (`f64::round`) at every quantization
//! point.

use crate::hex::HexColor;
use serde::{Deserialize, Serialize};

/// A color in HSL form: hue in degrees `[0,360)`, saturation and lightness
/// in integer percent `[0,100]`. Transient intermediate value; the engine
/// never hands one out except alongside its derived hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

/// Convert a canonical hex color to integer HSL.
pub fn hex_to_hsl(hex: &HexColor) -> Hsl {
    let (r8, g8, b8) = hex.rgb();
    let r = f64::from(r8) / 255.0;
    let g = f64::from(g8) / 255.0;
    let b = f64::from(b8) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        // Achromatic: hue is meaningless, pin it to zero.
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (sector / 6.0, s)
    };

    Hsl {
        h: (h * 360.0).round() as u16 % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// Convert integer HSL back to a canonical hex color.
///
/// Standard chroma/intermediate construction banded by 60° sextant.
pub fn hsl_to_hex(hsl: Hsl) -> HexColor {
    let h = f64::from(hsl.h % 360);
    let s = f64::from(hsl.s.min(100)) / 100.0;
    let l = f64::from(hsl.l.min(100)) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    HexColor::from_rgb(
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}
