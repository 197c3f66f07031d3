//! Rhythm calculators
//!
//! The pure computation core: unit conversion, the modular type scale, the
//! vertical rhythm box-model rule, and the match-type policy hook. Nothing
//! here touches the host; everything is testable headless.

pub mod policy;
pub mod scale;
pub mod units;
pub mod vertical;

// Re-export commonly used functions
pub use policy::{default_match_type, type_rules_for_step, MatchType, TypeRules};
pub use scale::{compute_type_step, compute_type_step_in};
pub use units::{in_unit, to_absolute, to_relative, Unit};
pub use vertical::{compute_rhythm_units, compute_rhythm_units_in, line_height_px, lines_for_font_size};
