//! Property-based tests across the whole engine.
//!
//! Tolerances here are calibrated to integer HSL quantization: one percent
//! of lightness is ~2.5 channel units, so a hex → HSL → hex trip can move a
//! channel by a few units in the worst case even though typical brand
//! colors stay within ±1.

use proptest::prelude::*;
use shadecraft_core::{
    generate_palette, hex_to_hsl, hsl_to_hex, is_valid_hex, normalize_hex, SHADE_KEYS,
};

fn channel_delta(a: &str, b: &str) -> u8 {
    let byte = |s: &str, i| u8::from_str_radix(&s[i..i + 2], 16).unwrap();
    (0..3)
        .map(|i| byte(a, 1 + 2 * i).abs_diff(byte(b, 1 + 2 * i)))
        .max()
        .unwrap()
}

fn hue_distance(a: u16, b: u16) -> u16 {
    let diff = a.abs_diff(b);
    diff.min(360 - diff)
}

/// Chroma of a quantized HSL value, in 0..=255 channel units. Hue is only
/// well-defined when this is comfortably above the rounding noise floor.
fn chroma_u8(s: u8, l: u8) -> i32 {
    (100 - (i32::from(l) * 2 - 100).abs()) * i32::from(s) * 255 / 10_000
}

proptest! {
    #[test]
    fn normalization_is_idempotent(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let raw = format!("{r:02x}{g:02x}{b:02x}");
        let once = normalize_hex(&raw).unwrap();
        let twice = normalize_hex(once.as_str()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn spelling_variants_normalize_identically(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let bare = format!("{r:02x}{g:02x}{b:02x}");
        let prefixed = format!("#{}", bare.to_uppercase());
        prop_assert_eq!(normalize_hex(&bare), normalize_hex(&prefixed));
    }

    #[test]
    fn shorthand_expands_to_duplicated_channels(
        r in 0u8..=15, g in 0u8..=15, b in 0u8..=15,
    ) {
        let short = format!("{r:x}{g:x}{b:x}");
        let long = format!("{r:x}{r:x}{g:x}{g:x}{b:x}{b:x}");
        prop_assert_eq!(normalize_hex(&short), normalize_hex(&long));
    }

    #[test]
    fn junk_never_validates(input in "[^0-9a-fA-F#]{1,12}") {
        prop_assert!(!is_valid_hex(&input));
        prop_assert!(normalize_hex(&input).is_none());
    }

    #[test]
    fn round_trip_stays_within_quantization_bound(
        r in 0u8..=255, g in 0u8..=255, b in 0u8..=255,
    ) {
        let hex = normalize_hex(&format!("{r:02x}{g:02x}{b:02x}")).unwrap();
        let back = hsl_to_hex(hex_to_hsl(&hex));
        prop_assert!(
            channel_delta(hex.as_str(), back.as_str()) <= 6,
            "{} -> {}", hex, back,
        );
    }

    #[test]
    fn palette_is_complete_ordered_and_anchored(
        r in 0u8..=255, g in 0u8..=255, b in 0u8..=255,
    ) {
        let base = normalize_hex(&format!("{r:02x}{g:02x}{b:02x}")).unwrap();
        let palette = generate_palette(&base);
        let keys: Vec<u16> = palette.iter().map(|(shade, _)| shade).collect();
        prop_assert_eq!(keys, SHADE_KEYS.to_vec());
        prop_assert_eq!(palette.base(), &base);
    }

    #[test]
    fn palette_is_deterministic(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let base = normalize_hex(&format!("{r:02x}{g:02x}{b:02x}")).unwrap();
        prop_assert_eq!(generate_palette(&base), generate_palette(&base));
    }

    #[test]
    fn hue_survives_the_ramp_while_chromatic(
        r in 0u8..=255, g in 0u8..=255, b in 0u8..=255,
    ) {
        let base = normalize_hex(&format!("{r:02x}{g:02x}{b:02x}")).unwrap();
        let h0 = hex_to_hsl(&base).h;
        for (shade, color) in generate_palette(&base).iter() {
            let hsl = hex_to_hsl(color);
            if chroma_u8(hsl.s, hsl.l) < 60 {
                continue;
            }
            prop_assert!(
                hue_distance(h0, hsl.h) <= 1,
                "shade {} of {}: hue {} vs base {}", shade, base, hsl.h, h0,
            );
        }
    }

    #[test]
    fn derived_lightness_and_saturation_stay_clamped(
        r in 0u8..=255, g in 0u8..=255, b in 0u8..=255,
    ) {
        let base = normalize_hex(&format!("{r:02x}{g:02x}{b:02x}")).unwrap();
        for (shade, color) in generate_palette(&base).iter() {
            if shade == 500 {
                continue; // the anchor is the raw base, exempt from clamping
            }
            let hsl = hex_to_hsl(color);
            prop_assert!(hsl.l <= 98, "shade {} lightness {}", shade, hsl.l);
        }
    }
}
