//! Modular type scale calculator
//!
//! Computes font sizes as integer powers of the configured scale ratio
//! around the base size. Step 0 is an exact no-op: it returns the base
//! font size without touching floating point exponentiation.

use crate::models::TypographyConfig;

use super::units::{in_unit, Unit};

/// Font size in pixels for an integer step on the modular scale
///
/// Negative steps walk down the scale, positive steps walk up. Step 0
/// returns `base_font_size` exactly.
pub fn compute_type_step(step: i32, config: &TypographyConfig) -> f64 {
    if step == 0 {
        return config.base_font_size;
    }
    config.base_font_size * config.scale_ratio.multiplier().powi(step)
}

/// Same as [`compute_type_step`], expressed in the requested unit
pub fn compute_type_step_in(unit: Unit, step: i32, config: &TypographyConfig) -> f64 {
    in_unit(unit, compute_type_step(step, config), config.base_font_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NamedRatio, ScaleRatio};

    fn cfg(ratio: ScaleRatio) -> TypographyConfig {
        TypographyConfig::new(16.0, 1.5, ratio).unwrap()
    }

    #[test]
    fn test_step_zero_is_exactly_base() {
        let config = cfg(ScaleRatio::Named(NamedRatio::Golden));
        assert_eq!(compute_type_step(0, &config), 16.0);
    }

    #[test]
    fn test_known_steps() {
        let config = cfg(ScaleRatio::Named(NamedRatio::MinorThird));
        assert!((compute_type_step(1, &config) - 19.2).abs() < 1e-9);
        let down = compute_type_step(-1, &config);
        assert!((down - 16.0 / 1.2).abs() < 1e-9);

        let octave = cfg(ScaleRatio::Named(NamedRatio::Octave));
        assert_eq!(compute_type_step(3, &octave), 128.0);
    }

    #[test]
    fn test_relative_output_is_the_bare_power() {
        // In rem the base cancels out, leaving multiplier^step.
        let config = cfg(ScaleRatio::Factor(1.25));
        let rem = compute_type_step_in(Unit::Rem, 2, &config);
        assert!((rem - 1.5625).abs() < 1e-9);
    }
}
