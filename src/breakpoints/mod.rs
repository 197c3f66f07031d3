//! Breakpoint resolution
//!
//! Folds the ordered breakpoint rules over a default configuration using the
//! host's viewport-query capability. The cascade is deliberately
//! non-exclusive and last-wins: ranges may overlap at their boundaries, and
//! every matching rule's overrides land on the accumulator in declaration
//! order. Without a viewport capability no rule can match, so the defaults
//! pass through untouched.

use crate::host::ViewportQuery;
use crate::models::{Breakpoints, ConfigError, TypographyConfig};

/// Effective configuration for the current viewport
///
/// The merged result re-enters [`TypographyConfig::new`], so a rule that
/// cascades into the rejected 4/3 line-height ratio fails here rather than
/// producing an off-grid config.
pub fn resolve_breakpoints(
    breakpoints: &Breakpoints,
    defaults: &TypographyConfig,
    viewport: Option<&dyn ViewportQuery>,
) -> Result<TypographyConfig, ConfigError> {
    let Breakpoints::Rules(rules) = breakpoints else {
        return Ok(defaults.clone());
    };
    let Some(viewport) = viewport else {
        return Ok(defaults.clone());
    };

    let mut base_font_size = defaults.base_font_size;
    let mut line_height_ratio = defaults.line_height_ratio;
    let mut scale_ratio = defaults.scale_ratio;
    for rule in rules {
        if !viewport.matches(&rule.condition) {
            continue;
        }
        if let Some(value) = rule.overrides.base_font_size {
            base_font_size = value;
        }
        if let Some(value) = rule.overrides.line_height_ratio {
            line_height_ratio = value;
        }
        if let Some(value) = rule.overrides.scale_ratio {
            scale_ratio = value;
        }
    }
    TypographyConfig::new(base_font_size, line_height_ratio, scale_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BreakpointRule, ConfigOverride, ScaleRatio};

    /// Stub viewport that matches a fixed set of conditions
    struct FixedViewport(Vec<&'static str>);

    impl ViewportQuery for FixedViewport {
        fn matches(&self, condition: &str) -> bool {
            self.0.contains(&condition)
        }
    }

    fn rules() -> Breakpoints {
        Breakpoints::Rules(vec![
            BreakpointRule {
                condition: "(max-width: 319px)".to_string(),
                overrides: ConfigOverride {
                    base_font_size: Some(15.0),
                    ..Default::default()
                },
            },
            BreakpointRule {
                condition: "(min-width: 319px)".to_string(),
                overrides: ConfigOverride {
                    base_font_size: Some(18.0),
                    ..Default::default()
                },
            },
        ])
    }

    #[test]
    fn test_no_match_yields_defaults() {
        let defaults = TypographyConfig::default();
        let viewport = FixedViewport(vec![]);
        let resolved = resolve_breakpoints(&rules(), &defaults, Some(&viewport)).unwrap();
        assert_eq!(resolved, defaults);
    }

    #[test]
    fn test_single_match_overrides_only_its_keys() {
        let defaults = TypographyConfig::default();
        let viewport = FixedViewport(vec!["(min-width: 319px)"]);
        let resolved = resolve_breakpoints(&rules(), &defaults, Some(&viewport)).unwrap();
        assert_eq!(resolved.base_font_size, 18.0);
        assert_eq!(resolved.line_height_ratio, defaults.line_height_ratio);
        assert_eq!(resolved.scale_ratio, defaults.scale_ratio);
    }

    #[test]
    fn test_overlapping_matches_cascade_last_wins() {
        // Both ranges match at the 319px boundary; the later rule wins.
        let defaults = TypographyConfig::default();
        let viewport = FixedViewport(vec!["(max-width: 319px)", "(min-width: 319px)"]);
        let resolved = resolve_breakpoints(&rules(), &defaults, Some(&viewport)).unwrap();
        assert_eq!(resolved.base_font_size, 18.0);
    }

    #[test]
    fn test_later_match_keeps_earlier_keys_it_does_not_override() {
        let defaults = TypographyConfig::default();
        let breakpoints = Breakpoints::Rules(vec![
            BreakpointRule {
                condition: "a".to_string(),
                overrides: ConfigOverride {
                    line_height_ratio: Some(11.0 / 8.0),
                    ..Default::default()
                },
            },
            BreakpointRule {
                condition: "b".to_string(),
                overrides: ConfigOverride {
                    base_font_size: Some(20.0),
                    ..Default::default()
                },
            },
        ]);
        let viewport = FixedViewport(vec!["a", "b"]);
        let resolved = resolve_breakpoints(&breakpoints, &defaults, Some(&viewport)).unwrap();
        assert_eq!(resolved.base_font_size, 20.0);
        assert_eq!(resolved.line_height_ratio, 11.0 / 8.0);
    }

    #[test]
    fn test_missing_viewport_capability_degrades_to_defaults() {
        let defaults = TypographyConfig::default();
        let resolved = resolve_breakpoints(&rules(), &defaults, None).unwrap();
        assert_eq!(resolved, defaults);
    }

    #[test]
    fn test_disabled_breakpoints_skip_resolution() {
        let defaults = TypographyConfig::default();
        let viewport = FixedViewport(vec!["(min-width: 319px)"]);
        let resolved =
            resolve_breakpoints(&Breakpoints::Disabled, &defaults, Some(&viewport)).unwrap();
        assert_eq!(resolved, defaults);
    }

    #[test]
    fn test_cascading_into_four_thirds_fails_fast() {
        let defaults = TypographyConfig::default();
        let breakpoints = Breakpoints::Rules(vec![BreakpointRule {
            condition: "a".to_string(),
            overrides: ConfigOverride {
                line_height_ratio: Some(1.0 + 1.0 / 3.0),
                scale_ratio: Some(ScaleRatio::Factor(1.2)),
                ..Default::default()
            },
        }]);
        let viewport = FixedViewport(vec!["a"]);
        assert_eq!(
            resolve_breakpoints(&breakpoints, &defaults, Some(&viewport)),
            Err(ConfigError::InvalidLineHeightRatio)
        );
    }
}
