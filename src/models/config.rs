//! Typography configuration
//!
//! This module defines the immutable typography configuration value that the
//! rhythm calculators consume, along with the configuration error hierarchy.
//! Construction is the validation boundary: a config that exists is a config
//! the rhythm math can keep on an exact pixel grid.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::scale::ScaleRatio;

/// Diagnostic for the one line-height ratio the engine refuses outright.
///
/// 1 + 1/3 compounds sub-pixel rounding errors on every rhythm line, so the
/// layout strays from the baseline grid no matter how the caller rounds.
/// 18/14 is close visually and lands on exact pixels far more often.
/// See http://stackoverflow.com/questions/19669598/forcing-chrome-for-windows-to-respect-sub-pixel-line-heights
pub const INVALID_LINE_HEIGHT: &str = "Using a line-height of 1.3333333333333333 is guaranteed \
to introduce compounding sub-pixel rounding errors that will cause your layout \
to stray from the vertical rhythm. It is recommended you use a line-height of \
18 / 14 (1.2857142857142858) instead. The difference between the two is slight and the \
calculated sizes are more likely to align with an exact pixel.";

/// Errors raised while constructing or resolving typography configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The rejected 4/3 line-height ratio (see [`INVALID_LINE_HEIGHT`])
    #[error("{}", INVALID_LINE_HEIGHT)]
    InvalidLineHeightRatio,

    /// A scale ratio name outside the named musical-interval table
    #[error("Unknown scale ratio name: {0:?} (expected a named musical interval such as \"minor third\")")]
    UnknownScaleRatio(String),

    /// A type step name outside the size ladder
    #[error("Unknown type step: {0:?}")]
    UnknownTypeStep(String),

    /// A numeric field that must be strictly positive
    #[error("{field} must be > 0, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}

/// Reject the one line-height ratio that cannot be reconciled with the pixel
/// grid. The comparison is intentionally exact: only the true float 1 + 1/3
/// is the documented drift source, near misses are the caller's business.
pub fn check_line_height_ratio(ratio: f64) -> Result<(), ConfigError> {
    if ratio == 1.0 + 1.0 / 3.0 {
        return Err(ConfigError::InvalidLineHeightRatio);
    }
    if ratio <= 0.0 {
        return Err(ConfigError::NonPositive {
            field: "lineHeightRatio",
            value: ratio,
        });
    }
    Ok(())
}

/// The effective typography configuration for one rhythm subtree
///
/// Immutable once constructed; recomputation always builds a fresh value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TypographyConfig {
    /// Root font size in pixels
    pub base_font_size: f64,

    /// Line height as a ratio of the base font size
    pub line_height_ratio: f64,

    /// Modular scale ratio (named musical interval or bare multiplier)
    pub scale_ratio: ScaleRatio,
}

impl TypographyConfig {
    /// Build a validated configuration
    ///
    /// Fails fast on non-positive values, a non-positive scale multiplier,
    /// or the rejected 4/3 line-height ratio. Never substitutes defaults for
    /// bad values.
    pub fn new(
        base_font_size: f64,
        line_height_ratio: f64,
        scale_ratio: ScaleRatio,
    ) -> Result<Self, ConfigError> {
        if base_font_size <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "baseFontSize",
                value: base_font_size,
            });
        }
        check_line_height_ratio(line_height_ratio)?;
        let multiplier = scale_ratio.multiplier();
        if multiplier <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "scaleRatio",
                value: multiplier,
            });
        }
        Ok(Self {
            base_font_size,
            line_height_ratio,
            scale_ratio,
        })
    }
}

/// Derived per-subtree state: the effective config plus its baseline unit
///
/// `baseline_px` is the integer pixel height of one rhythm line at step 0.
/// Replaced wholesale on every recompute, never mutated in place.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BaselineState {
    #[serde(flatten)]
    pub config: TypographyConfig,

    /// Pixel height of one rhythm line, published under the `baseline` key
    #[serde(rename = "baseline")]
    pub baseline_px: f64,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            base_font_size: 16.0,
            line_height_ratio: 1.5,
            scale_ratio: ScaleRatio::Named(super::scale::NamedRatio::DiminishedFourth),
        }
    }
}
