//! Per-stage success probabilities
//!
//! Every roll in the pipeline is a single d6 against a threshold `T`:
//! success chance `(7 - T) / 6`, clamped to `[0, 1]`. `T = 1` always
//! succeeds, `T = 7` never does.

mod normal;

pub use normal::{erf, normal_cdf};

use crate::types::{NormalizedAttacker, NormalizedDefender};

/// Faces on the die every threshold is rolled against
const D6: f64 = 6.0;

/// Success probability for a d6 threshold
pub fn threshold_probability(threshold: u32) -> f64 {
    ((7.0 - threshold as f64) / D6).clamp(0.0, 1.0)
}

/// Chance to hit for a given skill threshold
pub fn hit_probability(skill: u32) -> f64 {
    threshold_probability(skill)
}

/// Roll needed to wound, from strength vs toughness
pub fn wound_threshold(strength: u32, toughness: u32) -> u32 {
    // u64 so doubling never overflows
    let (s, t) = (strength as u64, toughness as u64);
    if s >= 2 * t {
        2
    } else if s > t {
        3
    } else if s == t {
        4
    } else if 2 * s <= t {
        6
    } else {
        5
    }
}

/// Chance to wound, from strength vs toughness
pub fn wound_probability(strength: u32, toughness: u32) -> f64 {
    threshold_probability(wound_threshold(strength, toughness))
}

/// Best available save after armour penetration
///
/// The armour save worsens by `armor_pen`; the invulnerable save ignores it.
/// A threshold above 6 cannot be made.
pub fn save_probability(save: u32, armor_pen: u32, invulnerable_save: u32) -> f64 {
    let adjusted_armour = save.saturating_add(armor_pen);
    let armour = if adjusted_armour <= 6 {
        threshold_probability(adjusted_armour)
    } else {
        0.0
    };
    let invulnerable = if invulnerable_save <= 6 {
        threshold_probability(invulnerable_save)
    } else {
        0.0
    };
    armour.max(invulnerable)
}

/// Chance that a single point of damage is NOT prevented by fell-no-pain
pub fn fnp_pass_probability(fell_no_pain: u32) -> f64 {
    if fell_no_pain <= 6 {
        ((fell_no_pain as f64 - 1.0) / D6).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// Probabilities for each filter in the pipeline, computed once per pairing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageProbabilities {
    /// Attack -> hit
    pub hit: f64,
    /// Hit -> wound
    pub wound: f64,
    /// Wound -> unsaved wound
    pub fail_save: f64,
    /// Damage point -> applied damage point
    pub fail_fnp: f64,
}

impl StageProbabilities {
    pub fn new(attacker: &NormalizedAttacker, defender: &NormalizedDefender) -> Self {
        let probabilities = StageProbabilities {
            hit: hit_probability(attacker.skill),
            wound: wound_probability(attacker.strength, defender.toughness),
            fail_save: 1.0
                - save_probability(defender.save, attacker.armor_pen, defender.invulnerable_save),
            fail_fnp: fnp_pass_probability(defender.fell_no_pain),
        };
        tracing::debug!(?probabilities, "stage probabilities");
        probabilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dice_core::Quantity;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_threshold_bounds() {
        assert!((threshold_probability(1) - 1.0).abs() < EPS);
        assert!((threshold_probability(4) - 0.5).abs() < EPS);
        assert!(threshold_probability(7).abs() < EPS);
        assert!(threshold_probability(12).abs() < EPS);
        assert!((threshold_probability(0) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_hit_probability_strictly_decreasing() {
        for skill in 1..7 {
            assert!(hit_probability(skill + 1) < hit_probability(skill));
        }
    }

    #[test]
    fn test_wound_table() {
        assert_eq!(wound_threshold(8, 4), 2);
        assert_eq!(wound_threshold(10, 4), 2);
        assert_eq!(wound_threshold(5, 4), 3);
        assert_eq!(wound_threshold(4, 4), 4);
        assert_eq!(wound_threshold(3, 4), 5);
        assert_eq!(wound_threshold(2, 4), 6);
        assert_eq!(wound_threshold(3, 7), 5);
        assert_eq!(wound_threshold(3, 6), 6);
        assert!((wound_probability(4, 4) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_armour_penetration() {
        // 3+ save with AP1 becomes 4+
        assert!((save_probability(3, 1, 7) - 0.5).abs() < EPS);
        // pushed past 6: no armour save
        assert!(save_probability(5, 2, 7).abs() < EPS);
    }

    #[test]
    fn test_invulnerable_save_takes_precedence() {
        // 3+ armour at AP3 is 6+, invulnerable 4+ is better
        assert!((save_probability(3, 3, 4) - 0.5).abs() < EPS);
        // armour better than invulnerable
        assert!((save_probability(2, 0, 5) - 5.0 / 6.0).abs() < EPS);
    }

    #[test]
    fn test_unsaveable() {
        assert!(save_probability(7, 0, 7).abs() < EPS);
    }

    #[test]
    fn test_fnp() {
        assert!((fnp_pass_probability(7) - 1.0).abs() < EPS);
        assert!((fnp_pass_probability(5) - 4.0 / 6.0).abs() < EPS);
        assert!((fnp_pass_probability(6) - 5.0 / 6.0).abs() < EPS);
    }

    #[test]
    fn test_stage_probabilities() {
        let attacker = NormalizedAttacker {
            num_models: 10,
            attacks: Quantity::Flat(1),
            skill: 3,
            strength: 4,
            armor_pen: 1,
            damage: Quantity::Flat(1),
        };
        let defender = NormalizedDefender {
            num_models: 5,
            toughness: 4,
            save: 3,
            invulnerable_save: 7,
            fell_no_pain: 7,
            wounds: 1,
        };
        let p = StageProbabilities::new(&attacker, &defender);
        assert!((p.hit - 4.0 / 6.0).abs() < EPS);
        assert!((p.wound - 3.0 / 6.0).abs() < EPS);
        assert!((p.fail_save - 4.0 / 6.0).abs() < EPS);
        assert!((p.fail_fnp - 1.0).abs() < EPS);
    }
}
