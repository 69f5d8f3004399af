//! Dice notation - `[count]d<sides>[+|-modifier]`
//!
//! The die marker is case-insensitive, the count defaults to 1 and the
//! modifier to 0. Surrounding whitespace is ignored; nothing else is.
//!
//! Examples: `d6`, `D3+1`, `2D6`, `3d6-2`.

use crate::ParseError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A parsed dice expression: roll `count` dice of `sides` faces, sum, add `modifier`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceSpec {
    /// Number of dice rolled (always >= 1)
    pub count: u32,
    /// Faces per die (always >= 1)
    pub sides: u32,
    /// Flat amount added to the sum, may be negative
    #[serde(default)]
    pub modifier: i32,
}

impl DiceSpec {
    /// Create a dice spec without a modifier
    pub fn new(count: u32, sides: u32) -> Self {
        DiceSpec {
            count,
            sides,
            modifier: 0,
        }
    }

    /// Builder: set the modifier
    pub fn with_modifier(mut self, modifier: i32) -> Self {
        self.modifier = modifier;
        self
    }

    /// Expected value of a single roll: count * (sides + 1) / 2 + modifier
    pub fn mean(&self) -> f64 {
        self.count as f64 * (self.sides as f64 + 1.0) / 2.0 + self.modifier as f64
    }

    /// Variance of a single roll: count * (sides^2 - 1) / 12
    ///
    /// The modifier shifts the distribution and does not contribute.
    pub fn variance(&self) -> f64 {
        let sides = self.sides as f64;
        self.count as f64 * (sides * sides - 1.0) / 12.0
    }

    /// Smallest possible total
    pub fn min_total(&self) -> i64 {
        self.count as i64 + self.modifier as i64
    }

    /// Largest possible total
    pub fn max_total(&self) -> i64 {
        self.count as i64 * self.sides as i64 + self.modifier as i64
    }

    /// Roll the dice and return the signed total (modifier included)
    pub fn roll_raw(&self, rng: &mut impl Rng) -> i64 {
        let sides = self.sides.max(1);
        let sum: i64 = (0..self.count)
            .map(|_| rng.gen_range(1..=sides) as i64)
            .sum();
        sum + self.modifier as i64
    }
}

impl fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count != 1 {
            write!(f, "{}", self.count)?;
        }
        write!(f, "D{}", self.sides)?;
        if self.modifier != 0 {
            write!(f, "{:+}", self.modifier)?;
        }
        Ok(())
    }
}

impl FromStr for DiceSpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_dice_notation(s)
    }
}

/// Check whether `text` is valid dice notation
///
/// Never fails; prefer this to decide between the dice and integer paths.
/// Plain integers such as `"4"` are not dice notation.
pub fn is_dice_notation(text: &str) -> bool {
    parse_dice_notation(text).is_ok()
}

/// Parse dice notation into a [`DiceSpec`]
///
/// # Errors
/// - [`ParseError::Invalid`] if the text does not match the grammar
/// - [`ParseError::ZeroCount`] / [`ParseError::ZeroSides`] for unrollable dice
/// - [`ParseError::Overflow`] if a number does not fit
pub fn parse_dice_notation(text: &str) -> Result<DiceSpec, ParseError> {
    let trimmed = text.trim();
    let invalid = || ParseError::Invalid(text.to_string());

    let marker = trimmed
        .find(|c: char| c == 'd' || c == 'D')
        .ok_or_else(invalid)?;
    let (count_part, rest) = trimmed.split_at(marker);
    let rest = &rest[1..];

    if !count_part.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let sides_len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (sides_part, modifier_part) = rest.split_at(sides_len);
    if sides_part.is_empty() {
        return Err(invalid());
    }

    let modifier = match modifier_part.chars().next() {
        None => 0,
        Some('+') | Some('-') => {
            let digits = &modifier_part[1..];
            if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            modifier_part
                .parse::<i32>()
                .map_err(|_| ParseError::Overflow(text.to_string()))?
        }
        Some(_) => return Err(invalid()),
    };

    let count = if count_part.is_empty() {
        1
    } else {
        parse_digits(count_part, text)?
    };
    let sides = parse_digits(sides_part, text)?;

    if count == 0 {
        return Err(ParseError::ZeroCount(text.to_string()));
    }
    if sides == 0 {
        return Err(ParseError::ZeroSides(text.to_string()));
    }

    Ok(DiceSpec {
        count,
        sides,
        modifier,
    })
}

/// Parse a run of ASCII digits; the only possible failure is overflow
fn parse_digits(digits: &str, original: &str) -> Result<u32, ParseError> {
    digits
        .parse::<u32>()
        .map_err(|_| ParseError::Overflow(original.to_string()))
}
