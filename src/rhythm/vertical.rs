//! Vertical rhythm calculator
//!
//! Every vertical box-model quantity is a multiple of one rhythm line.
//! The line height is rounded to a whole pixel before multiplying: sub-pixel
//! line heights are the drift source this whole engine exists to prevent,
//! so no fractional line height ever escapes this module.

use crate::models::TypographyConfig;

use super::units::{in_unit, Unit};

/// Pixel height of one rhythm line, rounded to the nearest whole pixel
pub fn line_height_px(config: &TypographyConfig) -> f64 {
    (config.base_font_size * config.line_height_ratio).round()
}

/// Pixel size of `lines` rhythm lines
///
/// `lines` is typically a whole or half count of lines for margins and
/// padding, and a whole count for line heights.
pub fn compute_rhythm_units(lines: f64, config: &TypographyConfig) -> f64 {
    lines * line_height_px(config)
}

/// Same as [`compute_rhythm_units`], expressed in the requested unit
pub fn compute_rhythm_units_in(unit: Unit, lines: f64, config: &TypographyConfig) -> f64 {
    in_unit(unit, compute_rhythm_units(lines, config), config.base_font_size)
}

/// Minimum whole number of rhythm lines that contains `font_size_px`
///
/// A font size taller than one line must span enough whole lines to keep
/// the text block on the grid.
pub fn lines_for_font_size(font_size_px: f64, config: &TypographyConfig) -> f64 {
    (font_size_px / line_height_px(config)).ceil()
}
