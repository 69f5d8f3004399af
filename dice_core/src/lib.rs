//! dice_core - Dice notation and variable quantities
//!
//! This library provides:
//! - DiceSpec: a parsed `NdS+M` expression
//! - Quantity: a flat value or a dice roll, with per-model moments
//! - Notation helpers: `is_dice_notation` / `parse_dice_notation`
//!
//! # Quick Start
//!
//! ```rust
//! use dice_core::{parse_dice_notation, Quantity};
//!
//! let spec = parse_dice_notation("2D6+1").unwrap();
//! assert_eq!((spec.count, spec.sides, spec.modifier), (2, 6, 1));
//!
//! let attacks: Quantity = "D3".parse().unwrap();
//! assert!(attacks.is_random());
//! assert!((attacks.mean() - 2.0).abs() < f64::EPSILON);
//! ```

pub mod notation;
pub mod quantity;

pub use notation::{is_dice_notation, parse_dice_notation, DiceSpec};
pub use quantity::Quantity;

use thiserror::Error;

/// Error parsing dice notation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid dice notation: \"{0}\"")]
    Invalid(String),
    #[error("Dice notation \"{0}\" rolls zero dice")]
    ZeroCount(String),
    #[error("Dice notation \"{0}\" uses a die with zero sides")]
    ZeroSides(String),
    #[error("Number out of range in \"{0}\"")]
    Overflow(String),
}
