//! Quantity - a flat value or a dice roll
//!
//! Used for attack counts and per-hit damage, both of which may be fixed
//! ("2") or random ("D6+1").

use crate::notation::{is_dice_notation, parse_dice_notation, DiceSpec};
use crate::ParseError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A per-model amount that is either fixed or rolled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    /// Fixed value
    Flat(u32),
    /// Rolled value
    Dice(DiceSpec),
}

impl Quantity {
    /// Whether the value is rolled rather than fixed
    pub fn is_random(&self) -> bool {
        matches!(self, Quantity::Dice(_))
    }

    /// Expected value for one model (or one hit)
    pub fn mean(&self) -> f64 {
        match self {
            Quantity::Flat(value) => *value as f64,
            Quantity::Dice(spec) => spec.mean(),
        }
    }

    /// Variance for one model (or one hit); 0 for flat values
    pub fn variance(&self) -> f64 {
        match self {
            Quantity::Flat(_) => 0.0,
            Quantity::Dice(spec) => spec.variance(),
        }
    }

    /// Draw one value, floored at zero
    pub fn roll(&self, rng: &mut impl Rng) -> u32 {
        match self {
            Quantity::Flat(value) => *value,
            Quantity::Dice(spec) => spec.roll_raw(rng).clamp(0, u32::MAX as i64) as u32,
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::Flat(1)
    }
}

impl From<DiceSpec> for Quantity {
    fn from(spec: DiceSpec) -> Self {
        Quantity::Dice(spec)
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Quantity::Flat(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Flat(value) => write!(f, "{}", value),
            Quantity::Dice(spec) => write!(f, "{}", spec),
        }
    }
}

impl FromStr for Quantity {
    type Err = ParseError;

    /// Dice notation becomes [`Quantity::Dice`], a non-negative integer [`Quantity::Flat`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_dice_notation(s) {
            return parse_dice_notation(s).map(Quantity::Dice);
        }
        s.trim()
            .parse::<u32>()
            .map(Quantity::Flat)
            .map_err(|_| ParseError::Invalid(s.to_string()))
    }
}
