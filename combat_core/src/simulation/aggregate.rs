//! Reducing trial records into a report

use super::trial::TrialRecord;
use crate::types::{KillDistribution, SimulationReport, StatSummary};

/// Mean and population standard deviation of one field across all trials
fn summarize_field(records: &[TrialRecord], field: impl Fn(&TrialRecord) -> f64) -> StatSummary {
    if records.is_empty() {
        return StatSummary::default();
    }
    let n = records.len() as f64;
    let mean = records.iter().map(&field).sum::<f64>() / n;
    let variance = records
        .iter()
        .map(|r| {
            let d = field(r) - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    StatSummary::new(mean, variance.sqrt())
}

/// Relative frequency of each kill count, with counts above `max_kills` clamped
fn kill_frequencies(records: &[TrialRecord], max_kills: u32) -> KillDistribution {
    let mut dist = KillDistribution::zeros(max_kills);
    if records.is_empty() {
        return dist;
    }
    let mut counts = vec![0u64; max_kills as usize + 1];
    for record in records {
        counts[record.kills.min(max_kills) as usize] += 1;
    }
    let n = records.len() as f64;
    for (kills, count) in counts.into_iter().enumerate() {
        dist.set(kills as u32, count as f64 / n);
    }
    dist
}

/// Aggregate trial records against a defending unit of `max_kills` models
pub fn summarize(records: &[TrialRecord], max_kills: u32) -> SimulationReport {
    SimulationReport {
        attacks: summarize_field(records, |r| r.attacks as f64),
        impacts: summarize_field(records, |r| r.impacts as f64),
        wounds: summarize_field(records, |r| r.wounds as f64),
        unsaved: summarize_field(records, |r| r.unsaved as f64),
        damage_before_fnp: summarize_field(records, |r| r.damage_before_fnp as f64),
        damage_after_fnp: summarize_field(records, |r| r.damage_after_fnp as f64),
        wasted: summarize_field(records, |r| r.wasted as f64),
        kills: summarize_field(records, |r| r.kills as f64),
        kills_distribution: kill_frequencies(records, max_kills),
    }
}
