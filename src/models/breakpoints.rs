//! Breakpoint rules
//!
//! Ordered viewport-condition rules carrying partial typography overrides.
//! Rules deserialize from a JS object (declaration order preserved) or from
//! the literal `false` sentinel that disables breakpoint resolution.

use std::fmt;

use lazy_static::lazy_static;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::scale::{NamedRatio, ScaleRatio};

/// Partial typography configuration carried by a breakpoint rule
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigOverride {
    pub base_font_size: Option<f64>,
    pub line_height_ratio: Option<f64>,
    pub scale_ratio: Option<ScaleRatio>,
}

/// One viewport condition paired with its overrides
#[derive(Clone, Debug, PartialEq)]
pub struct BreakpointRule {
    /// Media condition string, e.g. `(min-width: 599px)`
    pub condition: String,
    pub overrides: ConfigOverride,
}

/// The breakpoint set for a provider: an ordered rule list, or disabled
#[derive(Clone, Debug, PartialEq)]
pub enum Breakpoints {
    /// The `false` sentinel: skip resolution entirely
    Disabled,
    /// Rules in declaration order
    Rules(Vec<BreakpointRule>),
}

impl Breakpoints {
    pub fn is_disabled(&self) -> bool {
        matches!(self, Breakpoints::Disabled)
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Breakpoints::Rules(DEFAULT_BREAKPOINTS.clone())
    }
}

lazy_static! {
    /// Default breakpoint set, based on BBC GEL typography. The page layout
    /// scales as a whole because the box-model calculators derive everything
    /// from these typographic values.
    pub static ref DEFAULT_BREAKPOINTS: Vec<BreakpointRule> = vec![
        BreakpointRule {
            condition: "(max-width: 319px)".to_string(),
            overrides: ConfigOverride {
                base_font_size: Some(15.0),
                line_height_ratio: Some(18.0 / 14.0),
                scale_ratio: Some(ScaleRatio::Named(NamedRatio::MinorThird)),
            },
        },
        BreakpointRule {
            condition: "(min-width: 319px) and (max-width: 599px)".to_string(),
            overrides: ConfigOverride {
                base_font_size: Some(16.0),
                line_height_ratio: Some(11.0 / 8.0),
                scale_ratio: Some(ScaleRatio::Named(NamedRatio::MajorThird)),
            },
        },
        BreakpointRule {
            condition: "(min-width: 599px)".to_string(),
            overrides: ConfigOverride {
                base_font_size: Some(18.0),
                line_height_ratio: Some(18.0 / 14.0),
                scale_ratio: Some(ScaleRatio::Named(NamedRatio::MajorThird)),
            },
        },
    ];
}

impl Serialize for Breakpoints {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Breakpoints::Disabled => serializer.serialize_bool(false),
            Breakpoints::Rules(rules) => {
                let mut map = serializer.serialize_map(Some(rules.len()))?;
                for rule in rules {
                    map.serialize_entry(&rule.condition, &rule.overrides)?;
                }
                map.end()
            }
        }
    }
}

struct BreakpointsVisitor;

impl<'de> Visitor<'de> for BreakpointsVisitor {
    type Value = Breakpoints;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("false or a map of media conditions to overrides")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        if value {
            // Only `false` is a sentinel; `true` has no meaning here.
            return Err(E::custom("breakpoints must be false or a rule map"));
        }
        Ok(Breakpoints::Disabled)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut rules = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((condition, overrides)) = access.next_entry::<String, ConfigOverride>()? {
            rules.push(BreakpointRule { condition, overrides });
        }
        Ok(Breakpoints::Rules(rules))
    }
}

impl<'de> Deserialize<'de> for Breakpoints {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BreakpointsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_false_sentinel_disables() {
        let bp: Breakpoints = serde_json::from_str("false").unwrap();
        assert!(bp.is_disabled());
        assert!(serde_json::from_str::<Breakpoints>("true").is_err());
    }

    #[test]
    fn test_map_preserves_declaration_order() {
        let json = r#"{
            "(max-width: 319px)": {"baseFontSize": 15},
            "(min-width: 319px)": {"baseFontSize": 18, "scaleRatio": "major third"}
        }"#;
        let bp: Breakpoints = serde_json::from_str(json).unwrap();
        let Breakpoints::Rules(rules) = bp else {
            panic!("expected rules");
        };
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].condition, "(max-width: 319px)");
        assert_eq!(rules[0].overrides.base_font_size, Some(15.0));
        assert_eq!(rules[1].condition, "(min-width: 319px)");
        assert_eq!(
            rules[1].overrides.scale_ratio,
            Some(ScaleRatio::Named(NamedRatio::MajorThird))
        );
    }

    #[test]
    fn test_default_table_round_trips() {
        let defaults = Breakpoints::default();
        let json = serde_json::to_string(&defaults).unwrap();
        let back: Breakpoints = serde_json::from_str(&json).unwrap();
        assert_eq!(back, defaults);
    }
}
