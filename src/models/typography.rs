//! Semantic type steps
//!
//! The named size ladder, largest to smallest, with `body` as the designated
//! no-op step. Each step maps to an integer exponent on the modular scale.
//! The names follow the traditional printers' sizes used by BBC GEL.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::config::ConfigError;

/// A named step on the type scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeStep {
    Canon,
    Trafalgar,
    DoublePica,
    GreatPrimer,
    Pica,
    Body,
    LongPrimer,
    Brevier,
    Minion,
}

/// Every step, largest to smallest
pub const TYPE_STEPS: [TypeStep; 9] = [
    TypeStep::Canon,
    TypeStep::Trafalgar,
    TypeStep::DoublePica,
    TypeStep::GreatPrimer,
    TypeStep::Pica,
    TypeStep::Body,
    TypeStep::LongPrimer,
    TypeStep::Brevier,
    TypeStep::Minion,
];

impl TypeStep {
    /// Scale exponent for this step, or `None` for the no-op `body` step.
    ///
    /// `body` deliberately carries no exponent: consumers apply no typography
    /// rules at all for it, leaving the inherited base styling untouched.
    /// `pica` is an explicit exponent 0, which the scale math maps to the
    /// base size unchanged.
    pub fn exponent(&self) -> Option<i32> {
        match self {
            TypeStep::Canon => Some(4),
            TypeStep::Trafalgar => Some(3),
            TypeStep::DoublePica => Some(2),
            TypeStep::GreatPrimer => Some(1),
            TypeStep::Pica => Some(0),
            TypeStep::Body => None,
            TypeStep::LongPrimer => Some(-1),
            TypeStep::Brevier => Some(-2),
            TypeStep::Minion => Some(-3),
        }
    }

    /// The camelCase step name used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeStep::Canon => "canon",
            TypeStep::Trafalgar => "trafalgar",
            TypeStep::DoublePica => "doublePica",
            TypeStep::GreatPrimer => "greatPrimer",
            TypeStep::Pica => "pica",
            TypeStep::Body => "body",
            TypeStep::LongPrimer => "longPrimer",
            TypeStep::Brevier => "brevier",
            TypeStep::Minion => "minion",
        }
    }
}

impl fmt::Display for TypeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeStep {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TYPE_STEPS
            .iter()
            .copied()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownTypeStep(s.to_string()))
    }
}
