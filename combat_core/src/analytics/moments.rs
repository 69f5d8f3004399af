//! Mean/variance propagation for random counts

use crate::types::StatSummary;
use dice_core::Quantity;

/// First two moments of a random quantity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Moments {
    pub mean: f64,
    pub variance: f64,
}

impl Moments {
    pub fn new(mean: f64, variance: f64) -> Self {
        Moments { mean, variance }
    }

    /// Moments of the sum of `models` independent draws of `quantity`
    pub fn of_population(quantity: &Quantity, models: u32) -> Self {
        let n = models as f64;
        Moments {
            mean: quantity.mean() * n,
            variance: quantity.variance() * n,
        }
    }

    /// Binomial thinning: each unit survives independently with probability `p`
    ///
    /// Law of total variance: `var' = p^2 var + p (1 - p) mean`.
    pub fn thin(self, p: f64) -> Self {
        Moments {
            mean: self.mean * p,
            variance: p * p * self.variance + p * (1.0 - p) * self.mean,
        }
    }

    /// Random sum: each unit of this count contributes an independent `per_unit`
    ///
    /// `mean = N d`, `var = N var_d + var_N d^2`.
    pub fn compound(self, per_unit: Moments) -> Self {
        Moments {
            mean: self.mean * per_unit.mean,
            variance: self.mean * per_unit.variance
                + self.variance * per_unit.mean * per_unit.mean,
        }
    }

    /// Divide by a fixed amount (mean and sigma both scale by `1 / divisor`)
    pub fn scale_down(self, divisor: f64) -> Self {
        Moments {
            mean: self.mean / divisor,
            variance: self.variance / (divisor * divisor),
        }
    }

    /// Standard deviation; rounding noise below zero reads as 0
    pub fn sigma(&self) -> f64 {
        self.variance.max(0.0).sqrt()
    }

    pub fn summary(&self) -> StatSummary {
        StatSummary::new(self.mean, self.sigma())
    }
}
