//! Models module for the vertical rhythm engine
//!
//! This module contains the configuration value types consumed by the
//! rhythm calculators and the provider: the typography config, the named
//! scale-ratio table, the semantic type-step ladder, and breakpoint rules.

pub mod breakpoints;
pub mod config;
pub mod scale;
pub mod typography;

// Re-export commonly used types
pub use breakpoints::{BreakpointRule, Breakpoints, ConfigOverride, DEFAULT_BREAKPOINTS};
pub use config::{BaselineState, ConfigError, TypographyConfig, INVALID_LINE_HEIGHT};
pub use scale::{NamedRatio, ScaleRatio, NAMED_RATIOS};
pub use typography::{TypeStep, TYPE_STEPS};
