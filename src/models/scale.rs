//! Modular scale ratios
//!
//! This module defines the named musical-interval multipliers used by the
//! type scale calculator. The numeric values are part of the portable
//! contract: they are a fixed table, not derived from interval math, so that
//! computed sizes are reproducible across hosts.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::config::ConfigError;

/// A named musical interval with a fixed multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedRatio {
    MinorSecond,
    MajorSecond,
    MinorThird,
    MajorThird,
    DiminishedFourth,
    PerfectFifth,
    MinorSixth,
    Golden,
    Phi,
    MajorSixth,
    MinorSeventh,
    MajorSeventh,
    Octave,
    MajorTenth,
    MajorEleventh,
    MajorTwelfth,
    DoubleOctave,
}

/// Every named ratio, in table order
pub const NAMED_RATIOS: [NamedRatio; 17] = [
    NamedRatio::MinorSecond,
    NamedRatio::MajorSecond,
    NamedRatio::MinorThird,
    NamedRatio::MajorThird,
    NamedRatio::DiminishedFourth,
    NamedRatio::PerfectFifth,
    NamedRatio::MinorSixth,
    NamedRatio::Golden,
    NamedRatio::Phi,
    NamedRatio::MajorSixth,
    NamedRatio::MinorSeventh,
    NamedRatio::MajorSeventh,
    NamedRatio::Octave,
    NamedRatio::MajorTenth,
    NamedRatio::MajorEleventh,
    NamedRatio::MajorTwelfth,
    NamedRatio::DoubleOctave,
];

impl NamedRatio {
    /// Fixed multiplier table (reproduced verbatim, not re-derived)
    pub fn multiplier(&self) -> f64 {
        match self {
            NamedRatio::MinorSecond => 1.067,
            NamedRatio::MajorSecond => 1.125,
            NamedRatio::MinorThird => 1.2,
            NamedRatio::MajorThird => 1.25,
            NamedRatio::DiminishedFourth => 1.414,
            NamedRatio::PerfectFifth => 1.5,
            NamedRatio::MinorSixth => 1.6,
            NamedRatio::Golden => 1.618,
            NamedRatio::Phi => 1.618,
            NamedRatio::MajorSixth => 1.667,
            NamedRatio::MinorSeventh => 1.778,
            NamedRatio::MajorSeventh => 1.875,
            NamedRatio::Octave => 2.0,
            NamedRatio::MajorTenth => 2.5,
            NamedRatio::MajorEleventh => 2.667,
            NamedRatio::MajorTwelfth => 3.0,
            NamedRatio::DoubleOctave => 4.0,
        }
    }

    /// The spelled-out interval name used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            NamedRatio::MinorSecond => "minor second",
            NamedRatio::MajorSecond => "major second",
            NamedRatio::MinorThird => "minor third",
            NamedRatio::MajorThird => "major third",
            NamedRatio::DiminishedFourth => "diminished fourth",
            NamedRatio::PerfectFifth => "perfect fifth",
            NamedRatio::MinorSixth => "minor sixth",
            NamedRatio::Golden => "golden",
            NamedRatio::Phi => "phi",
            NamedRatio::MajorSixth => "major sixth",
            NamedRatio::MinorSeventh => "minor seventh",
            NamedRatio::MajorSeventh => "major seventh",
            NamedRatio::Octave => "octave",
            NamedRatio::MajorTenth => "major tenth",
            NamedRatio::MajorEleventh => "major eleventh",
            NamedRatio::MajorTwelfth => "major twelfth",
            NamedRatio::DoubleOctave => "double octave",
        }
    }
}

impl fmt::Display for NamedRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamedRatio {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMED_RATIOS
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownScaleRatio(s.to_string()))
    }
}

/// A scale ratio: either a bare multiplier or a named interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleRatio {
    /// Explicit numeric multiplier
    Factor(f64),
    /// Named musical interval from the fixed table
    Named(NamedRatio),
}

impl ScaleRatio {
    /// Resolve to the numeric multiplier
    pub fn multiplier(&self) -> f64 {
        match self {
            ScaleRatio::Factor(factor) => *factor,
            ScaleRatio::Named(named) => named.multiplier(),
        }
    }
}

impl From<NamedRatio> for ScaleRatio {
    fn from(named: NamedRatio) -> Self {
        ScaleRatio::Named(named)
    }
}

impl From<f64> for ScaleRatio {
    fn from(factor: f64) -> Self {
        ScaleRatio::Factor(factor)
    }
}

impl Serialize for ScaleRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ScaleRatio::Factor(factor) => serializer.serialize_f64(*factor),
            ScaleRatio::Named(named) => serializer.serialize_str(named.as_str()),
        }
    }
}

struct ScaleRatioVisitor;

impl<'de> Visitor<'de> for ScaleRatioVisitor {
    type Value = ScaleRatio;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a numeric multiplier or a named musical interval")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(ScaleRatio::Factor(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(ScaleRatio::Factor(value as f64))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(ScaleRatio::Factor(value as f64))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        NamedRatio::from_str(value)
            .map(ScaleRatio::Named)
            .map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for ScaleRatio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScaleRatioVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_named_ratios_are_above_one() {
        for ratio in NAMED_RATIOS {
            assert!(ratio.multiplier() > 1.0, "{} <= 1", ratio);
        }
    }

    #[test]
    fn test_name_round_trip() {
        for ratio in NAMED_RATIOS {
            assert_eq!(NamedRatio::from_str(ratio.as_str()), Ok(ratio));
        }
    }

    #[test]
    fn test_unknown_name_is_a_config_error() {
        let err = NamedRatio::from_str("augmented ninth").unwrap_err();
        assert_eq!(err, ConfigError::UnknownScaleRatio("augmented ninth".to_string()));
    }

    #[test]
    fn test_golden_and_phi_share_a_multiplier() {
        assert_eq!(NamedRatio::Golden.multiplier(), NamedRatio::Phi.multiplier());
    }

    #[test]
    fn test_serde_accepts_number_or_name() {
        let named: ScaleRatio = serde_json::from_str("\"perfect fifth\"").unwrap();
        assert_eq!(named, ScaleRatio::Named(NamedRatio::PerfectFifth));

        let factor: ScaleRatio = serde_json::from_str("1.33").unwrap();
        assert_eq!(factor, ScaleRatio::Factor(1.33));

        assert!(serde_json::from_str::<ScaleRatio>("\"bogus third\"").is_err());
    }
}
