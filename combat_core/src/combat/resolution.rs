//! Resolve a raw attacker/defender pairing into both estimates

use crate::analytics::compute_analytics;
use crate::config::SimulationConfig;
use crate::error::CombatError;
use crate::profile::{normalize_attacker, normalize_defender};
use crate::simulation::simulate;
use crate::types::{CombatResult, NormalizedAttacker, NormalizedDefender, RawAttacker, RawDefender};
use tracing::{debug, info_span};

/// Resolve with the default simulation config (100,000 unseeded trials)
pub fn calculate(
    attacker: &RawAttacker,
    defender: &RawDefender,
) -> Result<CombatResult, CombatError> {
    calculate_with_config(attacker, defender, &SimulationConfig::default())
}

/// Resolve with an explicit simulation config
///
/// Fails before any computation if the config or either profile is invalid.
/// Otherwise the analytical estimate and the simulation run concurrently.
pub fn calculate_with_config(
    attacker: &RawAttacker,
    defender: &RawDefender,
    config: &SimulationConfig,
) -> Result<CombatResult, CombatError> {
    config.validate()?;
    let attacker = normalize_attacker(attacker)?;
    let defender = normalize_defender(defender)?;
    Ok(calculate_normalized(&attacker, &defender, config))
}

/// Resolve already-normalized profiles
///
/// `config` is assumed valid; an invalid one yields zero simulation summaries.
pub fn calculate_normalized(
    attacker: &NormalizedAttacker,
    defender: &NormalizedDefender,
    config: &SimulationConfig,
) -> CombatResult {
    let span = info_span!(
        "calculate",
        trials = config.trials,
        defenders = defender.num_models
    );
    let _guard = span.enter();

    // either arm may run on a stolen worker thread, so each enters the span
    let (analytics, simulation) = rayon::join(
        || span.in_scope(|| compute_analytics(attacker, defender)),
        || span.in_scope(|| simulate(attacker, defender, config)),
    );

    debug!(
        analytical_kills = analytics.kills.mean,
        simulated_kills = simulation.kills.mean,
        wasted = simulation.wasted.mean,
        "resolved"
    );

    CombatResult {
        analytics,
        simulation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, ValidationError};

    fn raw_attacker(
        attacks: &str,
        skill: &str,
        strength: &str,
        ap: &str,
        damage: &str,
        models: &str,
    ) -> RawAttacker {
        RawAttacker {
            attacks: attacks.to_string(),
            skill: skill.to_string(),
            strength: strength.to_string(),
            armor_pen: ap.to_string(),
            damage: damage.to_string(),
            num_models: models.to_string(),
        }
    }

    fn raw_defender(
        toughness: &str,
        save: &str,
        invul: &str,
        fnp: &str,
        wounds: &str,
        models: &str,
    ) -> RawDefender {
        RawDefender {
            toughness: toughness.to_string(),
            save: save.to_string(),
            invulnerable_save: invul.to_string(),
            fell_no_pain: fnp.to_string(),
            wounds: wounds.to_string(),
            num_models: models.to_string(),
        }
    }

    fn config() -> SimulationConfig {
        SimulationConfig::default().with_trials(20_000).with_seed(99)
    }

    #[test]
    fn test_basic_infantry() {
        let attacker = raw_attacker("1", "3", "4", "1", "1", "10");
        let defender = raw_defender("4", "3", "N/A", "N/A", "1", "5");
        let result = calculate_with_config(&attacker, &defender, &config()).unwrap();

        let analytics = &result.analytics;
        assert!((analytics.attacks.mean - 10.0).abs() < 1e-9);
        assert!((analytics.impacts.mean - 20.0 / 3.0).abs() < 1e-9);
        assert!((analytics.wounds.mean - 10.0 / 3.0).abs() < 1e-9);
        assert!((analytics.unsaved.mean - 20.0 / 9.0).abs() < 1e-9);
        assert!((analytics.kills.mean - 20.0 / 9.0).abs() < 1e-9);
        assert_eq!(analytics.kills_distribution.len(), 6);

        let simulation = &result.simulation;
        assert!((simulation.unsaved.mean - 20.0 / 9.0).abs() < 0.05);
        assert!((simulation.kills_distribution.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_dice_attacks_and_damage_with_fnp() {
        let attacker = raw_attacker("D6", "4", "8", "2", "D3", "3");
        let defender = raw_defender("4", "4", "5", "5", "3", "4");
        let result = calculate_with_config(&attacker, &defender, &config()).unwrap();

        let analytics = &result.analytics;
        assert!((analytics.attacks.mean - 10.5).abs() < 1e-9);
        assert!(analytics.attacks.sigma > 0.0);
        // invulnerable 5+ beats 4+ worsened to 6+
        assert!((analytics.unsaved.mean - 10.5 * 0.5 * 5.0 / 6.0 * 2.0 / 3.0).abs() < 1e-9);
        assert!(analytics.damage_after_fnp.mean < analytics.damage_before_fnp.mean);

        let simulation = &result.simulation;
        assert!((simulation.attacks.mean - 10.5).abs() < 0.1);
        assert!(simulation.kills.mean <= 4.0);
    }

    #[test]
    fn test_save_of_seven_always_fails() {
        let attacker = raw_attacker("2", "2", "3", "0", "1", "5");
        let defender = raw_defender("3", "7", "N/A", "N/A", "1", "10");
        let result = calculate_with_config(&attacker, &defender, &config()).unwrap();
        let analytics = &result.analytics;
        assert!((analytics.unsaved.mean - analytics.wounds.mean).abs() < 1e-12);
        assert!((result.simulation.unsaved.mean - result.simulation.wounds.mean).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_profile_is_reported() {
        let attacker = raw_attacker("many", "3", "4", "0", "1", "10");
        let defender = raw_defender("4", "3", "N/A", "N/A", "1", "5");
        let err = calculate_with_config(&attacker, &defender, &config()).unwrap_err();
        assert!(matches!(
            err,
            CombatError::Validation(ValidationError::InvalidQuantity { field: "attacks", .. })
        ));

        let attacker = raw_attacker("1", "3", "4", "0", "1", "10");
        let defender = raw_defender("tough", "3", "N/A", "N/A", "1", "5");
        let err = calculate_with_config(&attacker, &defender, &config()).unwrap_err();
        assert!(matches!(
            err,
            CombatError::Validation(ValidationError::NotAnInteger { field: "toughness", .. })
        ));
    }

    #[test]
    fn test_zero_trials_rejected() {
        let attacker = raw_attacker("1", "3", "4", "0", "1", "10");
        let defender = raw_defender("4", "3", "N/A", "N/A", "1", "5");
        let err =
            calculate_with_config(&attacker, &defender, &config().with_trials(0)).unwrap_err();
        assert!(matches!(err, CombatError::Config(ConfigError::Validation(_))));
    }

    #[test]
    fn test_analytics_repeat_exactly() {
        let attacker = raw_attacker("D6+1", "3", "5", "1", "2", "4");
        let defender = raw_defender("4", "3", "N/A", "6", "2", "5");
        let a = calculate_with_config(&attacker, &defender, &config()).unwrap();
        let b = calculate_with_config(&attacker, &defender, &config()).unwrap();
        assert_eq!(a.analytics, b.analytics);
        assert_eq!(a.simulation, b.simulation);
    }

    #[test]
    fn test_default_config_runs() {
        let attacker = raw_attacker("1", "4", "4", "0", "1", "2");
        let defender = raw_defender("4", "4", "N/A", "N/A", "1", "1");
        let result = calculate(&attacker, &defender).unwrap();
        assert!((result.simulation.kills_distribution.total() - 1.0).abs() < 1e-9);
        assert_eq!(result.simulation.kills_distribution.len(), 2);
    }

    #[test]
    fn test_result_json_shape() {
        let attacker = raw_attacker("1", "3", "4", "1", "1", "10");
        let defender = raw_defender("4", "3", "N/A", "N/A", "1", "5");
        let result = calculate_with_config(&attacker, &defender, &config()).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        let analytics = json["analytics"].as_object().unwrap();
        for key in [
            "attacks",
            "impacts",
            "wounds",
            "unsaved",
            "damageBeforeFNP",
            "damageAfterFNP",
            "kills",
            "killsDistribution",
        ] {
            assert!(analytics.contains_key(key), "analytics missing {key}");
        }
        assert!(!analytics.contains_key("wasted"));
        assert!(json["simulation"]["wasted"]["mean"].is_number());
        assert!(json["simulation"]["killsDistribution"]["5"].is_number());
    }
}
