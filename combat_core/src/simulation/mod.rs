//! Monte Carlo simulator
//!
//! Resolves every die roll explicitly, tracking hit points per defending
//! model so overkill and carry-over are modelled exactly. Trials are split
//! into batches, each with its own `ChaCha8Rng` stream, so a seeded run gives
//! the same result whether batches run on the rayon pool or sequentially.

mod aggregate;
mod batch;
mod trial;

pub use aggregate::summarize;
pub use batch::batch_ranges;
pub use trial::{run_trial, DefenderPool, TrialRecord};

use crate::config::SimulationConfig;
use crate::probability::StageProbabilities;
use crate::types::{NormalizedAttacker, NormalizedDefender, SimulationReport};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::trace;

/// Run `trials` trials drawing from `rng`
pub fn run_trials(
    attacker: &NormalizedAttacker,
    defender: &NormalizedDefender,
    trials: usize,
    rng: &mut impl Rng,
) -> Vec<TrialRecord> {
    let p = StageProbabilities::new(attacker, defender);
    (0..trials)
        .map(|_| run_trial(attacker, defender, &p, rng))
        .collect()
}

/// Single-threaded simulation against any random source
pub fn simulate_with_rng(
    attacker: &NormalizedAttacker,
    defender: &NormalizedDefender,
    trials: u32,
    rng: &mut impl Rng,
) -> SimulationReport {
    let records = run_trials(attacker, defender, trials as usize, rng);
    summarize(&records, defender.num_models)
}

/// Random stream for one batch
fn batch_rng(seed: Option<u64>, batch: usize) -> ChaCha8Rng {
    match seed {
        Some(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(batch as u64);
            rng
        }
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Batched simulation driven by `config`
pub fn simulate(
    attacker: &NormalizedAttacker,
    defender: &NormalizedDefender,
    config: &SimulationConfig,
) -> SimulationReport {
    let ranges = batch_ranges(config.trials as usize, config.batches as usize);
    let p = StageProbabilities::new(attacker, defender);

    let run_batch = |(index, (start, end)): (usize, (usize, usize))| -> Vec<TrialRecord> {
        trace!(batch = index, trials = end - start, "running batch");
        let mut rng = batch_rng(config.seed, index);
        (start..end)
            .map(|_| run_trial(attacker, defender, &p, &mut rng))
            .collect()
    };

    let batches: Vec<Vec<TrialRecord>> = if config.parallel {
        ranges.into_par_iter().enumerate().map(run_batch).collect()
    } else {
        ranges.into_iter().enumerate().map(run_batch).collect()
    };

    let records: Vec<TrialRecord> = batches.into_iter().flatten().collect();
    summarize(&records, defender.num_models)
}
