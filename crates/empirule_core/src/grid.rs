//! Evenly spaced density samples over the plotted range.

use crate::distribution::Normal;

/// A dense sample of the density function over [μ − 5σ, μ + 5σ].
///
/// The grid is recomputed on each call and owned by it; identical inputs
/// produce bit-identical grids.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    xs: Vec<f64>,
    densities: Vec<f64>,
}

impl SampleGrid {
    /// Number of standard deviations covered on each side of the mean.
    pub const SPAN_SIGMAS: f64 = 5.0;

    /// Evaluate the density at `samples` evenly spaced x-values spanning
    /// [μ − 5σ, μ + 5σ], endpoints inclusive.
    ///
    /// `samples` must be positive; a zero count yields an empty grid.
    pub fn compute(normal: &Normal, samples: usize) -> Self {
        let min_x = normal.mean - Self::SPAN_SIGMAS * normal.std_dev;
        let max_x = normal.mean + Self::SPAN_SIGMAS * normal.std_dev;

        let mut xs = Vec::with_capacity(samples);
        let mut densities = Vec::with_capacity(samples);

        if samples == 1 {
            xs.push(min_x);
            densities.push(normal.pdf(min_x));
        } else {
            let step = (max_x - min_x) / (samples.saturating_sub(1)) as f64;
            for i in 0..samples {
                let x = min_x + i as f64 * step;
                xs.push(x);
                densities.push(normal.pdf(x));
            }
        }

        Self { xs, densities }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn densities(&self) -> &[f64] {
        &self.densities
    }

    /// Iterate over (x, density) pairs in ascending x order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs
            .iter()
            .copied()
            .zip(self.densities.iter().copied())
    }

    pub fn min_x(&self) -> f64 {
        self.xs.first().copied().unwrap_or(0.0)
    }

    pub fn max_x(&self) -> f64 {
        self.xs.last().copied().unwrap_or(0.0)
    }

    /// Largest sampled density. For any reasonably fine grid this is the
    /// density at the sample closest to the mean.
    pub fn max_density(&self) -> f64 {
        self.densities.iter().copied().fold(0.0_f64, f64::max)
    }

    /// Density of the first grid point at or beyond `x`.
    ///
    /// This is the "just past the σ boundary" lookup used to place guide
    /// lines and band arrows clear of the curve.
    pub fn density_at_or_after(&self, x: f64) -> Option<f64> {
        let idx = self.xs.partition_point(|&v| v < x);
        self.densities.get(idx).copied()
    }

    /// Trapezoidal integral of the sampled density over the grid range.
    pub fn integral(&self) -> f64 {
        self.points()
            .zip(self.points().skip(1))
            .map(|((x0, y0), (x1, y1))| (x1 - x0) * (y0 + y1) / 2.0)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_spans_five_sigmas() {
        let grid = SampleGrid::compute(&Normal::standard(), 1000);

        assert_eq!(grid.len(), 1000);
        assert!((grid.min_x() - -5.0).abs() < 1e-12);
        assert!((grid.max_x() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_grid_spacing_is_even() {
        let grid = SampleGrid::compute(&Normal::new(2.0, 0.5), 101);
        let xs = grid.xs();

        let step = xs[1] - xs[0];
        for pair in xs.windows(2) {
            assert!((pair[1] - pair[0] - step).abs() < 1e-12);
        }
    }

    #[test]
    fn test_density_integrates_to_one() {
        for normal in [
            Normal::standard(),
            Normal::new(-3.0, 0.25),
            Normal::new(10.0, 4.0),
        ] {
            let grid = SampleGrid::compute(&normal, 100_000);
            // ±5σ captures all but ~6e-7 of the mass
            assert!((grid.integral() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_recomputation_is_identical() {
        let normal = Normal::new(1.5, 2.0);
        let a = SampleGrid::compute(&normal, 5000);
        let b = SampleGrid::compute(&normal, 5000);
        assert_eq!(a, b);
    }

    #[test]
    fn test_density_at_or_after_picks_next_sample() {
        let normal = Normal::standard();
        let grid = SampleGrid::compute(&normal, 100_000);

        // The lookup lands just beyond +1σ, so the value is a hair below
        // pdf(1.0) on the falling slope.
        let just_past = grid.density_at_or_after(1.0).unwrap();
        assert!((just_past - normal.pdf(1.0)).abs() < 1e-4);
        assert!(just_past <= normal.pdf(1.0) + 1e-12);

        assert!(grid.density_at_or_after(100.0).is_none());
    }

    #[test]
    fn test_single_sample_grid() {
        let grid = SampleGrid::compute(&Normal::standard(), 1);
        assert_eq!(grid.len(), 1);
        assert!((grid.min_x() - -5.0).abs() < 1e-12);
    }
}
