//! Analytical estimator - closed-form moments through the attack pipeline
//!
//! attacks -> hits -> wounds -> unsaved -> damage -> damage after FNP -> kills
//!
//! Each filter is a binomial thinning of the previous count, damage is a
//! random sum over unsaved wounds, and kills divide the surviving damage by
//! the wounds per model. That last step ignores overkill; the simulator
//! models it exactly, so the two kill estimates are expected to differ.

mod distribution;
mod moments;

pub use distribution::kill_distribution;
pub use moments::Moments;

use crate::probability::StageProbabilities;
use crate::types::{AnalyticsReport, NormalizedAttacker, NormalizedDefender};

/// Compute the analytical report for an attacker/defender pairing
pub fn compute_analytics(
    attacker: &NormalizedAttacker,
    defender: &NormalizedDefender,
) -> AnalyticsReport {
    let p = StageProbabilities::new(attacker, defender);

    let attacks = Moments::of_population(&attacker.attacks, attacker.num_models);
    let impacts = attacks.thin(p.hit);
    let wounds = impacts.thin(p.wound);
    let unsaved = wounds.thin(p.fail_save);

    let per_hit = Moments::new(attacker.damage.mean(), attacker.damage.variance());
    let damage_before_fnp = unsaved.compound(per_hit);
    let damage_after_fnp = damage_before_fnp.thin(p.fail_fnp);

    let kills = damage_after_fnp.scale_down(defender.wounds.max(1) as f64);
    let kills_distribution = kill_distribution(kills.mean, kills.sigma(), defender.num_models);

    tracing::debug!(
        mean_kills = kills.mean,
        sigma_kills = kills.sigma(),
        "analytical estimate"
    );

    AnalyticsReport {
        attacks: attacks.summary(),
        impacts: impacts.summary(),
        wounds: wounds.summary(),
        unsaved: unsaved.summary(),
        damage_before_fnp: damage_before_fnp.summary(),
        damage_after_fnp: damage_after_fnp.summary(),
        kills: kills.summary(),
        kills_distribution,
    }
}
