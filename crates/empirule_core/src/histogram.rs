//! Fixed-range histogram binning for the sample overlay.

/// Count `values` into `bins` equal-width bins over [min, max].
///
/// Values outside the range are dropped; a value exactly at `max` lands in
/// the last bin. Returns an empty vector when `bins` is zero or the range
/// is degenerate.
pub fn bin_counts(values: &[f64], bins: usize, min: f64, max: f64) -> Vec<usize> {
    if bins == 0 || !(max > min) {
        return Vec::new();
    }

    let bin_width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];

    for &value in values {
        if value < min || value > max {
            continue;
        }
        let bin = ((value - min) / bin_width).floor() as usize;
        counts[bin.min(bins - 1)] += 1;
    }

    counts
}

/// Convert a bin count into a density estimate comparable with a pdf:
/// count / (total · bin_width).
pub fn count_to_density(count: usize, total: usize, bin_width: f64) -> f64 {
    if total == 0 || bin_width <= 0.0 {
        return 0.0;
    }
    count as f64 / (total as f64 * bin_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_cover_all_in_range_values() {
        let values = [0.1, 0.9, 1.5, 2.5, 3.9, 4.0];
        let counts = bin_counts(&values, 4, 0.0, 4.0);

        assert_eq!(counts, vec![2, 1, 1, 2]);
        assert_eq!(counts.iter().sum::<usize>(), values.len());
    }

    #[test]
    fn test_out_of_range_values_are_dropped() {
        let values = [-1.0, 0.5, 5.0];
        let counts = bin_counts(&values, 2, 0.0, 1.0);
        assert_eq!(counts.iter().sum::<usize>(), 1);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(bin_counts(&[1.0], 0, 0.0, 1.0).is_empty());
        assert!(bin_counts(&[1.0], 4, 1.0, 1.0).is_empty());
        assert!(bin_counts(&[1.0], 4, 2.0, 1.0).is_empty());
    }

    #[test]
    fn test_density_estimate_integrates_to_one() {
        // A uniform spread of samples: total density × width ≈ 1.
        let values: Vec<f64> = (0..1000).map(|i| i as f64 / 1000.0).collect();
        let counts = bin_counts(&values, 10, 0.0, 1.0);
        let bin_width = 0.1;

        let integral: f64 = counts
            .iter()
            .map(|&c| count_to_density(c, values.len(), bin_width) * bin_width)
            .sum();
        assert!((integral - 1.0).abs() < 1e-9);
    }
}
