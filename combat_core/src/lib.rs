//! combat_core - Combat resolution statistics for tabletop wargame units
//!
//! This library provides:
//! - Profile normalization: raw string profiles (with "N/A" and dice notation)
//!   into validated attacker/defender profiles
//! - Analytical estimator: closed-form mean/sigma for every pipeline stage and
//!   a normal-approximation kill distribution
//! - Monte Carlo simulator: per-die resolution with hit-point carry-over and
//!   wasted damage tracking
//! - Combat resolver: both estimates for one pairing, computed concurrently
//!
//! # Quick Start
//!
//! ```rust
//! use combat_core::prelude::*;
//!
//! let attacker = RawAttacker {
//!     attacks: "D6".to_string(),
//!     skill: "3".to_string(),
//!     strength: "4".to_string(),
//!     armor_pen: "1".to_string(),
//!     damage: "1".to_string(),
//!     num_models: "5".to_string(),
//! };
//! let defender = RawDefender {
//!     toughness: "4".to_string(),
//!     save: "3".to_string(),
//!     wounds: "1".to_string(),
//!     num_models: "10".to_string(),
//!     ..Default::default()
//! };
//!
//! let config = SimulationConfig::default().with_trials(10_000).with_seed(1);
//! let result = calculate_with_config(&attacker, &defender, &config).unwrap();
//! println!(
//!     "expected kills: {:.2} (analytical) / {:.2} (simulated)",
//!     result.analytics.kills.mean, result.simulation.kills.mean
//! );
//! ```

pub mod analytics;
pub mod combat;
pub mod config;
pub mod error;
pub mod prelude;
pub mod probability;
pub mod profile;
pub mod simulation;
pub mod types;

// Core API - what most users need
pub use combat::{calculate, calculate_normalized, calculate_with_config};
pub use types::{
    AnalyticsReport, CombatResult, KillDistribution, NormalizedAttacker, NormalizedDefender,
    RawAttacker, RawDefender, SimulationReport, StatSummary, NOT_APPLICABLE,
};

// Errors
pub use error::{CombatError, ConfigError, ValidationError};

// Configuration
pub use config::{SimulationConfig, DEFAULT_BATCHES, DEFAULT_TRIALS};

// Individual estimators
pub use analytics::compute_analytics;
pub use profile::{normalize_attacker, normalize_defender, MAX_MODELS};
pub use simulation::{simulate, simulate_with_rng};

// Re-export dice types used in normalized profiles
pub use dice_core::{is_dice_notation, parse_dice_notation, DiceSpec, ParseError, Quantity};
