//! Text formatting helpers for chart headers and the status bar.

use empirule_core::Normal;
use empirule_core::annotations::format_value;

/// Parameter line shown under the title, e.g. "μ = 0, σ = 1".
pub fn format_mu_sigma(normal: &Normal) -> String {
    format!(
        "μ = {}, σ = {}",
        format_value(normal.mean),
        format_value(normal.std_dev)
    )
}

/// Exact band masses for the status bar, e.g.
/// "±1σ 68.27%  ±2σ 95.45%  ±3σ 99.73%".
pub fn format_coverage_summary(normal: &Normal) -> String {
    format!(
        "±1σ {:.2}%  ±2σ {:.2}%  ±3σ {:.2}%",
        normal.coverage(1.0) * 100.0,
        normal.coverage(2.0) * 100.0,
        normal.coverage(3.0) * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mu_sigma_line() {
        assert_eq!(format_mu_sigma(&Normal::standard()), "μ = 0, σ = 1");
        assert_eq!(format_mu_sigma(&Normal::new(-2.5, 0.5)), "μ = -2.5, σ = 0.5");
    }

    #[test]
    fn test_coverage_summary_constants() {
        let summary = format_coverage_summary(&Normal::standard());
        assert_eq!(summary, "±1σ 68.27%  ±2σ 95.45%  ±3σ 99.73%");
    }
}
