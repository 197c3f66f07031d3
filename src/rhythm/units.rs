//! Unit conversion between absolute pixels and root-relative units
//!
//! Pure arithmetic. `base_font_size > 0` is a caller contract, matching the
//! CSS model where the root font size is always a positive length.

use serde::{Deserialize, Serialize};

/// Output unit requested by a calculator caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Unit {
    /// Absolute pixels
    Px,
    /// Root-relative units (rem)
    Rem,
}

/// Convert absolute pixels to root-relative units
pub fn to_relative(pixels: f64, base_font_size: f64) -> f64 {
    pixels / base_font_size
}

/// Convert root-relative units to absolute pixels
pub fn to_absolute(relative: f64, base_font_size: f64) -> f64 {
    relative * base_font_size
}

/// Express a pixel quantity in the requested unit
pub fn in_unit(unit: Unit, pixels: f64, base_font_size: f64) -> f64 {
    match unit {
        Unit::Px => pixels,
        Unit::Rem => to_relative(pixels, base_font_size),
    }
}
