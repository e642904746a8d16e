//! Normal (Gaussian) distribution parameters and density evaluation.

use rand::Rng;
use rand_distr::Distribution;

use crate::special::standard_normal_cdf;

/// Parameters of a normal distribution.
///
/// `std_dev` must be positive. This is a caller contract rather than a
/// validated invariant: a non-positive standard deviation produces degenerate
/// density values (NaN or infinities), not a reported error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    pub mean: f64,
    pub std_dev: f64,
}

impl Normal {
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    /// The standard normal: μ = 0, σ = 1.
    pub fn standard() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Probability density at `x`:
    /// f(x) = (1/(σ√(2π))) · exp(−(x−μ)²/(2σ²))
    pub fn pdf(&self, x: f64) -> f64 {
        let exponent = -(x - self.mean).powi(2) / (2.0 * self.std_dev * self.std_dev);
        (1.0 / (self.std_dev * (2.0 * std::f64::consts::PI).sqrt())) * exponent.exp()
    }

    /// Density at the mode, 1/(σ√(2π)).
    pub fn peak_density(&self) -> f64 {
        1.0 / (self.std_dev * (2.0 * std::f64::consts::PI).sqrt())
    }

    /// Probability mass within μ ± kσ, i.e. 2Φ(k) − 1.
    ///
    /// For k = 1, 2, 3 this yields the empirical-rule constants
    /// 0.6827, 0.9545, 0.9973.
    pub fn coverage(&self, k: f64) -> f64 {
        2.0 * standard_normal_cdf(k) - 1.0
    }

    /// Draw `count` samples from this distribution.
    ///
    /// Returns an empty vector when the parameters are rejected by the
    /// sampler (non-finite mean or σ < 0).
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<f64> {
        match rand_distr::Normal::new(self.mean, self.std_dev) {
            Ok(dist) => (0..count).map(|_| dist.sample(rng)).collect(),
            Err(_) => Vec::new(),
        }
    }
}
