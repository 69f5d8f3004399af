//! Core types: profiles in, statistics out

use dice_core::Quantity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Raw profiles (as entered by the user)
// ============================================================================

/// Attacker profile as entered in the form layer; every field is a string
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAttacker {
    /// Attacks per model: integer or dice notation
    pub attacks: String,
    /// To-hit threshold "2".."6", or "N/A" for weapons that always hit
    pub skill: String,
    pub strength: String,
    pub armor_pen: String,
    /// Damage per unsaved wound: integer or dice notation
    pub damage: String,
    pub num_models: String,
}

/// Defender profile as entered in the form layer; every field is a string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDefender {
    pub toughness: String,
    /// Armour save threshold, "7" for no save
    pub save: String,
    /// Invulnerable save threshold or "N/A"
    pub invulnerable_save: String,
    /// Fell-no-pain threshold or "N/A"
    pub fell_no_pain: String,
    /// Hit points per model
    pub wounds: String,
    pub num_models: String,
}

impl Default for RawDefender {
    fn default() -> Self {
        RawDefender {
            toughness: String::new(),
            save: String::new(),
            invulnerable_save: NOT_APPLICABLE.to_string(),
            fell_no_pain: NOT_APPLICABLE.to_string(),
            wounds: String::new(),
            num_models: String::new(),
        }
    }
}

/// Sentinel for optional thresholds
pub const NOT_APPLICABLE: &str = "N/A";

// ============================================================================
// Normalized profiles (pipeline-ready)
// ============================================================================

/// Attacking unit after normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedAttacker {
    pub num_models: u32,
    /// Attacks per model
    pub attacks: Quantity,
    /// To-hit threshold (1 = always hits, 7 = never hits)
    pub skill: u32,
    pub strength: u32,
    pub armor_pen: u32,
    /// Damage per unsaved wound
    pub damage: Quantity,
}

/// Defending unit after normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedDefender {
    pub num_models: u32,
    pub toughness: u32,
    /// Armour save threshold (7 = no save)
    pub save: u32,
    /// Invulnerable save threshold (7 = none)
    pub invulnerable_save: u32,
    /// Fell-no-pain threshold (7 = none)
    pub fell_no_pain: u32,
    /// Hit points per model (>= 1)
    pub wounds: u32,
}

// ============================================================================
// Results
// ============================================================================

/// Mean and standard deviation of one pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatSummary {
    pub mean: f64,
    pub sigma: f64,
}

impl StatSummary {
    pub fn new(mean: f64, sigma: f64) -> Self {
        StatSummary {
            mean,
            sigma: sigma.max(0.0),
        }
    }
}

/// Probability mass per kill count, keyed `0..=max_kills`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KillDistribution(BTreeMap<u32, f64>);

impl KillDistribution {
    /// All keys `0..=max_kills` present with zero mass
    pub fn zeros(max_kills: u32) -> Self {
        KillDistribution((0..=max_kills).map(|k| (k, 0.0)).collect())
    }

    /// Probability of exactly `kills` kills (0 for unknown keys)
    pub fn get(&self, kills: u32) -> f64 {
        self.0.get(&kills).copied().unwrap_or(0.0)
    }

    /// Set the mass for a kill count
    pub fn set(&mut self, kills: u32, probability: f64) {
        self.0.insert(kills, probability);
    }

    /// Add mass to a kill count
    pub fn add(&mut self, kills: u32, probability: f64) {
        *self.0.entry(kills).or_insert(0.0) += probability;
    }

    /// Iterate `(kills, probability)` in ascending kill order
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.0.iter().map(|(k, p)| (*k, *p))
    }

    /// Kill counts present
    pub fn keys(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all masses
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Kill count with the highest mass (lowest count wins ties)
    pub fn most_likely(&self) -> Option<u32> {
        self.0
            .iter()
            .fold(None, |best: Option<(u32, f64)>, (&k, &p)| match best {
                Some((_, best_p)) if best_p >= p => best,
                _ => Some((k, p)),
            })
            .map(|(k, _)| k)
    }

    /// Probability of at least `kills` kills
    pub fn at_least(&self, kills: u32) -> f64 {
        self.0.range(kills..).map(|(_, p)| p).sum()
    }
}

/// Closed-form estimate for every pipeline stage
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub attacks: StatSummary,
    pub impacts: StatSummary,
    pub wounds: StatSummary,
    pub unsaved: StatSummary,
    #[serde(rename = "damageBeforeFNP")]
    pub damage_before_fnp: StatSummary,
    #[serde(rename = "damageAfterFNP")]
    pub damage_after_fnp: StatSummary,
    pub kills: StatSummary,
    pub kills_distribution: KillDistribution,
}

/// Empirical statistics over Monte Carlo trials
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    pub attacks: StatSummary,
    pub impacts: StatSummary,
    pub wounds: StatSummary,
    pub unsaved: StatSummary,
    #[serde(rename = "damageBeforeFNP")]
    pub damage_before_fnp: StatSummary,
    #[serde(rename = "damageAfterFNP")]
    pub damage_after_fnp: StatSummary,
    /// Damage left over once every defending model is dead
    pub wasted: StatSummary,
    pub kills: StatSummary,
    pub kills_distribution: KillDistribution,
}

/// Both estimates for one attacker/defender pairing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CombatResult {
    pub analytics: AnalyticsReport,
    pub simulation: SimulationReport,
}
