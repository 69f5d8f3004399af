//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Profiles
pub use crate::types::{NormalizedAttacker, NormalizedDefender, RawAttacker, RawDefender};

// Results
pub use crate::types::{
    AnalyticsReport, CombatResult, KillDistribution, SimulationReport, StatSummary,
};

// Resolver
pub use crate::combat::{calculate, calculate_with_config};

// Config
pub use crate::config::SimulationConfig;

// Errors
pub use crate::error::{CombatError, ValidationError};

// Re-exports from dice_core
pub use dice_core::{DiceSpec, Quantity};
