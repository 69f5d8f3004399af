//! Profile normalization - raw form strings into pipeline-ready profiles
//!
//! Rules per field:
//! - "N/A" fields (skill, invulnerable save, fell-no-pain) map to a neutral
//!   threshold: 1 for skill (always hits), 7 for the saves (never succeeds)
//! - Attacks and damage accept dice notation or a plain integer
//! - Everything else is a strict integer
//!
//! Thresholds are range-checked to 1..=7, counts to >= 1 and unit sizes to
//! at most `MAX_MODELS`.

use crate::error::ValidationError;
use crate::types::{
    NormalizedAttacker, NormalizedDefender, RawAttacker, RawDefender, NOT_APPLICABLE,
};
use dice_core::{parse_dice_notation, ParseError, Quantity};

/// Lowest threshold (automatic success)
pub const MIN_THRESHOLD: u32 = 1;
/// Highest threshold (never succeeds)
pub const MAX_THRESHOLD: u32 = 7;

/// Largest unit size accepted on either side
///
/// Kill distributions hold one entry per defending model.
pub const MAX_MODELS: u32 = 10_000;

/// Neutral to-hit threshold for "N/A" skill
const NEUTRAL_SKILL: u32 = 1;
/// Neutral save / fell-no-pain threshold for "N/A"
const NEUTRAL_SAVE: u32 = 7;

/// Normalize an attacker profile
pub fn normalize_attacker(raw: &RawAttacker) -> Result<NormalizedAttacker, ValidationError> {
    let attacker = NormalizedAttacker {
        num_models: parse_count("numModels", &raw.num_models, 1, MAX_MODELS)?,
        attacks: parse_quantity("attacks", &raw.attacks)?,
        skill: parse_threshold("skill", &raw.skill, Some(NEUTRAL_SKILL))?,
        strength: parse_count("strength", &raw.strength, 1, u32::MAX)?,
        armor_pen: parse_count("armorPen", &raw.armor_pen, 0, u32::MAX)?,
        damage: parse_quantity("damage", &raw.damage)?,
    };
    tracing::debug!(?attacker, "normalized attacker");
    Ok(attacker)
}

/// Normalize a defender profile
pub fn normalize_defender(raw: &RawDefender) -> Result<NormalizedDefender, ValidationError> {
    let defender = NormalizedDefender {
        num_models: parse_count("numModels", &raw.num_models, 1, MAX_MODELS)?,
        toughness: parse_count("toughness", &raw.toughness, 1, u32::MAX)?,
        save: parse_threshold("save", &raw.save, None)?,
        invulnerable_save: parse_threshold(
            "invulnerableSave",
            &raw.invulnerable_save,
            Some(NEUTRAL_SAVE),
        )?,
        fell_no_pain: parse_threshold("fellNoPain", &raw.fell_no_pain, Some(NEUTRAL_SAVE))?,
        wounds: parse_count("wounds", &raw.wounds, 1, u32::MAX)?,
    };
    tracing::debug!(?defender, "normalized defender");
    Ok(defender)
}

fn parse_integer(field: &'static str, value: &str) -> Result<i64, ValidationError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NotAnInteger {
            field,
            value: value.to_string(),
        })
}

/// Integer in `min..=max`
fn parse_count(
    field: &'static str,
    value: &str,
    min: u32,
    max: u32,
) -> Result<u32, ValidationError> {
    let parsed = parse_integer(field, value)?;
    u32::try_from(parsed)
        .ok()
        .filter(|v| (min..=max).contains(v))
        .ok_or(ValidationError::OutOfRange {
            field,
            value: parsed,
            min: min as i64,
            max: max as i64,
        })
}

/// Threshold in `1..=7`, with `neutral` substituted for "N/A" where allowed
fn parse_threshold(
    field: &'static str,
    value: &str,
    neutral: Option<u32>,
) -> Result<u32, ValidationError> {
    if let Some(neutral) = neutral {
        if value.trim() == NOT_APPLICABLE {
            return Ok(neutral);
        }
    }

    let parsed = parse_integer(field, value)?;
    if (MIN_THRESHOLD as i64..=MAX_THRESHOLD as i64).contains(&parsed) {
        Ok(parsed as u32)
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value: parsed,
            min: MIN_THRESHOLD as i64,
            max: MAX_THRESHOLD as i64,
        })
    }
}

/// Dice notation or a non-negative integer
///
/// Notation that matches the grammar but cannot be rolled (`0d6`, `d0`)
/// reports the dice error; anything else falls back to integer parsing.
fn parse_quantity(field: &'static str, value: &str) -> Result<Quantity, ValidationError> {
    match parse_dice_notation(value) {
        Ok(spec) => return Ok(Quantity::Dice(spec)),
        Err(ParseError::Invalid(_)) => {}
        Err(source) => return Err(ValidationError::Dice { field, source }),
    }

    value
        .trim()
        .parse::<u32>()
        .map(Quantity::Flat)
        .map_err(|_| ValidationError::InvalidQuantity {
            field,
            value: value.to_string(),
        })
}
