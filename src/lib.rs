//! Vertical Rhythm Engine WASM Module
//!
//! This is the main WASM module for the vertical rhythm typography engine.
//! It computes a consistent baseline grid (font sizes, line heights, spacing
//! multiples) from a small set of ratios and keeps the grid synchronized
//! with viewport breakpoints.

pub mod api;
pub mod breakpoints;
pub mod host;
pub mod models;
pub mod provider;
pub mod rhythm;

// Re-export commonly used types
pub use breakpoints::resolve_breakpoints;
pub use models::{
    BaselineState, BreakpointRule, Breakpoints, ConfigError, ConfigOverride, NamedRatio,
    ScaleRatio, TypeStep, TypographyConfig,
};
pub use provider::{ProviderOptions, RhythmProvider, RhythmReader, RhythmScope};
pub use rhythm::{
    compute_rhythm_units, compute_rhythm_units_in, compute_type_step, compute_type_step_in,
    line_height_px, lines_for_font_size, type_rules_for_step, TypeRules, Unit,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Vertical rhythm WASM module initialized");
}
