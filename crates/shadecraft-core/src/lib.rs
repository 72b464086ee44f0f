//! shadecraft-core: brand color palette engine.
//!
//! Pure, synchronous color math for storefront theming: canonicalize
//! user-supplied hex strings, convert hex ↔ HSL, and derive a ten-shade
//! ramp (50..900) from one base color with a fixed delta table.
//!
//! ```text
//! raw input → hex::normalize_hex → HexColor
//!                                     │
//!                     palette::generate_palette
//!                    (hsl::hex_to_hsl → deltas → hsl::hsl_to_hex)
//!                                     │
//!                                  Palette
//! ```
//!
//! # Modules
//!
//! - `hex`: validation and canonicalization of hex color strings
//! - `hsl`: hex ↔ HSL conversion
//! - `palette`: shade ramp derivation from a base color
//! - `presets`: named quick-color starting points
//! - `error`: the engine's single error type
//! - `logging`: tracing subscriber setup for embedding applications
//!
//! Every operation is a stateless pure computation; there is no shared
//! state, no I/O, and nothing to coordinate across concurrent callers.
//!
//! # Safety
//!
//! This crate forbids unsafe code.

#![forbid(unsafe_code)]

pub mod error;
pub mod hex;
pub mod hsl;
pub mod logging;
pub mod palette;
pub mod presets;

pub use error::{ColorError, Result};
pub use hex::{is_valid_hex, normalize_hex, HexColor};
pub use hsl::{hex_to_hsl, hsl_to_hex, Hsl};
pub use palette::{generate_palette, Palette, ShadeDelta, SHADE_DELTAS, SHADE_KEYS};
pub use presets::{default_presets, QuickColor};
