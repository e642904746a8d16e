//! Numerical approximation of the standard normal CDF.

/// 1/√(2π)
const FRAC_1_SQRT_2PI: f64 = 0.3989422804014326779399460599343818684758586311649;

/// Standard normal CDF Φ(x) = P(Z ≤ x) for Z ~ N(0, 1).
///
/// Polynomial approximation from Abramowitz & Stegun, formula 26.2.17,
/// evaluated with Horner's scheme. Maximum absolute error < 7.5 × 10⁻⁸.
pub fn standard_normal_cdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x == f64::INFINITY {
        return 1.0;
    }
    if x == f64::NEG_INFINITY {
        return 0.0;
    }

    // Evaluate on |x| and reflect: Φ(−x) = 1 − Φ(x).
    let abs_x = x.abs();
    let t = 1.0 / (1.0 + 0.2316419 * abs_x);

    let density = FRAC_1_SQRT_2PI * (-0.5 * abs_x * abs_x).exp();

    let poly = t
        * (0.319381530
            + t * (-0.356563782 + t * (1.781477937 + t * (-1.821255978 + t * 1.330274429))));

    let upper = 1.0 - density * poly;

    if x >= 0.0 { upper } else { 1.0 - upper }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdf_at_zero() {
        assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-7);
    }

    #[test]
    fn test_cdf_symmetry() {
        for x in [0.5, 1.0, 1.96, 3.0] {
            let upper = standard_normal_cdf(x);
            let lower = standard_normal_cdf(-x);
            assert!((upper + lower - 1.0).abs() < 1e-7);
        }
    }

    #[test]
    fn test_cdf_known_quantiles() {
        assert!((standard_normal_cdf(1.96) - 0.975).abs() < 1e-3);
        assert!((standard_normal_cdf(1.0) - 0.8413).abs() < 1e-4);
        assert!((standard_normal_cdf(2.0) - 0.9772).abs() < 1e-4);
    }

    #[test]
    fn test_cdf_limits() {
        assert_eq!(standard_normal_cdf(f64::INFINITY), 1.0);
        assert_eq!(standard_normal_cdf(f64::NEG_INFINITY), 0.0);
        assert!(standard_normal_cdf(f64::NAN).is_nan());
    }
}
