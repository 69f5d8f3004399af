//! A single Monte Carlo trial

use crate::probability::StageProbabilities;
use crate::types::{NormalizedAttacker, NormalizedDefender};
use dice_core::Quantity;
use rand::Rng;

/// Per-trial totals for every tracked stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrialRecord {
    pub attacks: u64,
    pub impacts: u64,
    pub wounds: u64,
    pub unsaved: u64,
    pub damage_before_fnp: u64,
    pub damage_after_fnp: u64,
    pub wasted: u64,
    pub kills: u32,
}

/// Defending unit taking damage one model at a time
///
/// Damage carries over: a model keeps its lost hit points between hits, and
/// excess damage from a killing hit moves on to the next model. Once every
/// model is dead further damage is wasted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefenderPool {
    wounds_per_model: u32,
    models: u32,
    remaining_hp: u32,
    kills: u32,
    wasted: u64,
}

impl DefenderPool {
    pub fn new(defender: &NormalizedDefender) -> Self {
        let wounds_per_model = defender.wounds.max(1);
        DefenderPool {
            wounds_per_model,
            models: defender.num_models,
            remaining_hp: wounds_per_model,
            kills: 0,
            wasted: 0,
        }
    }

    /// Apply damage to the current model, rolling over to the next
    pub fn apply(&mut self, damage: u64) {
        let mut left = damage;
        while left > 0 && !self.is_wiped_out() {
            let hp = self.remaining_hp as u64;
            if left >= hp {
                left -= hp;
                self.kills += 1;
                self.remaining_hp = self.wounds_per_model;
            } else {
                self.remaining_hp -= left as u32;
                left = 0;
            }
        }
        self.wasted += left;
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn wasted(&self) -> u64 {
        self.wasted
    }

    /// Hit points left on the model currently taking damage
    pub fn remaining_hp(&self) -> u32 {
        self.remaining_hp
    }

    pub fn is_wiped_out(&self) -> bool {
        self.kills >= self.models
    }
}

/// Bernoulli draw
#[inline]
fn succeeds(rng: &mut impl Rng, p: f64) -> bool {
    rng.gen::<f64>() < p
}

/// Total attacks for the unit: one roll per model, or flat value x models
fn roll_attacks(attacker: &NormalizedAttacker, rng: &mut impl Rng) -> u64 {
    match attacker.attacks {
        Quantity::Flat(value) => value as u64 * attacker.num_models as u64,
        Quantity::Dice(_) => (0..attacker.num_models)
            .map(|_| attacker.attacks.roll(rng) as u64)
            .sum(),
    }
}

/// Damage points that get through fell-no-pain, one roll per point
fn surviving_points(points: u32, p: f64, rng: &mut impl Rng) -> u64 {
    if p >= 1.0 {
        return points as u64;
    }
    (0..points).filter(|_| succeeds(rng, p)).count() as u64
}

/// Resolve one full trial of the attack pipeline
pub fn run_trial(
    attacker: &NormalizedAttacker,
    defender: &NormalizedDefender,
    p: &StageProbabilities,
    rng: &mut impl Rng,
) -> TrialRecord {
    let mut record = TrialRecord {
        attacks: roll_attacks(attacker, rng),
        ..Default::default()
    };
    let mut pool = DefenderPool::new(defender);

    for _ in 0..record.attacks {
        if !succeeds(rng, p.hit) {
            continue;
        }
        record.impacts += 1;
        if !succeeds(rng, p.wound) {
            continue;
        }
        record.wounds += 1;
        if !succeeds(rng, p.fail_save) {
            continue;
        }
        record.unsaved += 1;

        let damage = attacker.damage.roll(rng);
        record.damage_before_fnp += damage as u64;
        let applied = surviving_points(damage, p.fail_fnp, rng);
        record.damage_after_fnp += applied;
        pool.apply(applied);
    }

    record.kills = pool.kills();
    record.wasted = pool.wasted();
    record
}
