use std::collections::HashSet;

use rhythm_wasm::host::ViewportQuery;
use rhythm_wasm::models::{
    BreakpointRule, Breakpoints, ConfigOverride, NamedRatio, ScaleRatio, TypographyConfig,
};
use rhythm_wasm::resolve_breakpoints;

/// Stub viewport reporting a fixed set of matching conditions
struct StubViewport {
    matching: HashSet<String>,
}

impl StubViewport {
    fn matching(conditions: &[&str]) -> Self {
        Self {
            matching: conditions.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ViewportQuery for StubViewport {
    fn matches(&self, condition: &str) -> bool {
        self.matching.contains(condition)
    }
}

fn two_rules() -> Breakpoints {
    Breakpoints::Rules(vec![
        BreakpointRule {
            condition: "(max-width:319px)".to_string(),
            overrides: ConfigOverride {
                base_font_size: Some(15.0),
                ..Default::default()
            },
        },
        BreakpointRule {
            condition: "(min-width:319px)".to_string(),
            overrides: ConfigOverride {
                base_font_size: Some(18.0),
                ..Default::default()
            },
        },
    ])
}

#[test]
fn test_both_predicates_false_yields_unmodified_defaults() {
    let defaults = TypographyConfig::default();
    let viewport = StubViewport::matching(&[]);
    let resolved = resolve_breakpoints(&two_rules(), &defaults, Some(&viewport)).unwrap();
    assert_eq!(resolved, defaults);
}

#[test]
fn test_second_predicate_true_overrides_base_font_size_only() {
    let defaults = TypographyConfig::default();
    let viewport = StubViewport::matching(&["(min-width:319px)"]);
    let resolved = resolve_breakpoints(&two_rules(), &defaults, Some(&viewport)).unwrap();
    assert_eq!(resolved.base_font_size, 18.0);
    assert_eq!(resolved.line_height_ratio, defaults.line_height_ratio);
    assert_eq!(resolved.scale_ratio, defaults.scale_ratio);
}

#[test]
fn test_default_gel_table_resolves_per_range() {
    let defaults = TypographyConfig::default();
    let breakpoints = Breakpoints::default();

    let narrow = StubViewport::matching(&["(max-width: 319px)"]);
    let resolved = resolve_breakpoints(&breakpoints, &defaults, Some(&narrow)).unwrap();
    assert_eq!(resolved.base_font_size, 15.0);
    assert_eq!(resolved.line_height_ratio, 18.0 / 14.0);
    assert_eq!(resolved.scale_ratio, ScaleRatio::Named(NamedRatio::MinorThird));

    let wide = StubViewport::matching(&["(min-width: 599px)"]);
    let resolved = resolve_breakpoints(&breakpoints, &defaults, Some(&wide)).unwrap();
    assert_eq!(resolved.base_font_size, 18.0);
    assert_eq!(resolved.scale_ratio, ScaleRatio::Named(NamedRatio::MajorThird));
}

/// Breakpoints parsed from JS-shaped JSON keep declaration order and drive
/// the cascade.
#[test]
fn test_resolution_after_serde_round_trip() {
    let json = r#"{
        "(max-width:319px)": {"baseFontSize": 15},
        "(min-width:319px)": {"baseFontSize": 18, "lineHeightRatio": 1.375}
    }"#;
    let breakpoints: Breakpoints = serde_json::from_str(json).unwrap();
    let defaults = TypographyConfig::default();
    let viewport = StubViewport::matching(&["(max-width:319px)", "(min-width:319px)"]);
    let resolved = resolve_breakpoints(&breakpoints, &defaults, Some(&viewport)).unwrap();
    assert_eq!(resolved.base_font_size, 18.0);
    assert_eq!(resolved.line_height_ratio, 1.375);
}
