//! Discrete kill distribution from a normal approximation

use crate::probability::normal_cdf;
use crate::types::KillDistribution;

/// Spread kill-count mass over `0..=max_kills`
///
/// With `sigma > 0` each integer `k` receives
/// `Phi((k + 0.5 - mean) / sigma) - Phi((k - 0.5 - mean) / sigma)`.
/// Mass below 0 is folded into `k = 0` and mass above `max_kills` into
/// `k = max_kills`, since kill counts are bounded by the defending unit.
/// With `sigma == 0` all mass sits on `round(mean)`, clamped to the same range.
pub fn kill_distribution(mean: f64, sigma: f64, max_kills: u32) -> KillDistribution {
    let mut dist = KillDistribution::zeros(max_kills);

    if sigma > 0.0 && sigma.is_finite() {
        let cdf = |edge: f64| normal_cdf((edge - mean) / sigma);
        for k in 0..=max_kills {
            let lower = if k == 0 { 0.0 } else { cdf(k as f64 - 0.5) };
            let upper = if k == max_kills {
                1.0
            } else {
                cdf(k as f64 + 0.5)
            };
            dist.set(k, (upper - lower).max(0.0));
        }
    } else {
        let k = mean.round().clamp(0.0, max_kills as f64) as u32;
        dist.set(k, 1.0);
    }

    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_point_mass_when_deterministic() {
        let dist = kill_distribution(2.4, 0.0, 5);
        assert_eq!(dist.len(), 6);
        assert!((dist.get(2) - 1.0).abs() < f64::EPSILON);
        assert!((dist.total() - 1.0).abs() < f64::EPSILON);
        assert_eq!(dist.iter().filter(|(_, p)| *p > 0.0).count(), 1);
    }

    #[test]
    fn test_point_mass_clamped_to_unit_size() {
        let dist = kill_distribution(9.0, 0.0, 3);
        assert!((dist.get(3) - 1.0).abs() < f64::EPSILON);
        assert_eq!(dist.keys().max(), Some(3));
    }

    #[test]
    fn test_interior_buckets_follow_normal() {
        let (mean, sigma) = (5.0, 1.5);
        let dist = kill_distribution(mean, sigma, 10);
        let expected = normal_cdf((5.5 - mean) / sigma) - normal_cdf((4.5 - mean) / sigma);
        assert!((dist.get(5) - expected).abs() < 1e-12);
        assert_eq!(dist.most_likely(), Some(5));
    }

    #[test]
    fn test_sums_to_one_even_with_tails() {
        let cases = [(0.3, 0.8, 4), (12.0, 3.0, 5), (2.5, 1.0, 20), (0.0, 0.01, 0)];
        for (mean, sigma, max_kills) in cases {
            let dist = kill_distribution(mean, sigma, max_kills);
            assert_eq!(
                dist.keys().collect::<Vec<_>>(),
                (0..=max_kills).collect::<Vec<_>>()
            );
            assert!((dist.total() - 1.0).abs() < 1e-3, "total was {}", dist.total());
        }
    }

    proptest! {
        #[test]
        fn prop_keys_and_total(
            mean in 0.0f64..50.0,
            sigma in 0.0f64..20.0,
            max_kills in 0u32..40,
        ) {
            let dist = kill_distribution(mean, sigma, max_kills);
            prop_assert_eq!(dist.len(), max_kills as usize + 1);
            prop_assert!(dist.iter().all(|(_, p)| p >= 0.0));
            prop_assert!((dist.total() - 1.0).abs() < 1e-3);
        }
    }
}
