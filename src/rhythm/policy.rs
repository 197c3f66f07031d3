//! Type rules and the match-type policy hook
//!
//! A play on `window.matchMedia` but for typography: once a step's font size
//! and rhythm-aligned line height are known, a policy function may adjust
//! the rules based on how far the size sits from the base. Callers can
//! supply their own policy; [`default_match_type`] is the stock one.

use crate::models::{TypeStep, TypographyConfig};

use super::scale::compute_type_step;
use super::units::to_relative;
use super::vertical::{compute_rhythm_units, lines_for_font_size};

/// Computed typography rules for one type step
#[derive(Debug, Clone, PartialEq)]
pub struct TypeRules {
    /// Font size in pixels
    pub font_size_px: f64,

    /// Line height in pixels, a whole multiple of the rhythm line
    pub line_height_px: f64,

    /// Letter spacing adjustment in pixels, if the policy applied one
    pub letter_spacing_px: Option<f64>,

    /// Whether the policy requests an uppercase transform
    pub uppercase: bool,
}

/// A policy adjusting computed rules relative to the configuration
pub type MatchType = fn(TypeRules, &TypographyConfig) -> TypeRules;

/// Stock policy: tighten letter spacing above 2x the base size, uppercase
/// below 0.75x
pub fn default_match_type(mut rules: TypeRules, config: &TypographyConfig) -> TypeRules {
    let relative = to_relative(rules.font_size_px, config.base_font_size);
    if relative > 2.0 {
        rules.letter_spacing_px = Some(-1.0);
    }
    if relative < 0.75 {
        rules.uppercase = true;
    }
    rules
}

/// Typography rules for a semantic step, or `None` for the no-op `body` step
///
/// The font size comes off the modular scale; the line height is the
/// smallest whole rhythm-line count that contains it. The policy (or
/// [`default_match_type`] when `None`) runs last.
pub fn type_rules_for_step(
    step: TypeStep,
    config: &TypographyConfig,
    policy: Option<MatchType>,
) -> Option<TypeRules> {
    let exponent = step.exponent()?;
    let font_size_px = compute_type_step(exponent, config);
    let line_height_px = compute_rhythm_units(lines_for_font_size(font_size_px, config), config);
    let rules = TypeRules {
        font_size_px,
        line_height_px,
        letter_spacing_px: None,
        uppercase: false,
    };
    Some(policy.unwrap_or(default_match_type)(rules, config))
}
