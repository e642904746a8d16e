//! Tick, guide-line, and empirical-rule band geometry.
//!
//! Everything here is backend-independent: positions, heights, and label
//! text. Mapping to colors, characters, or pixels belongs to the renderers.

use crate::distribution::Normal;
use crate::grid::SampleGrid;

/// Clearance multipliers applied to the density just beyond the 1σ, 2σ, and
/// 3σ boundaries when placing guide lines and band arrows. Presentation
/// constants tuned for the default parameters, not derived values.
pub const BAND_CLEARANCE: [f64; 3] = [1.3, 2.5, 10.0];

/// Cumulative-probability labels for the ±1σ, ±2σ, ±3σ bands.
pub const BAND_LABELS: [&str; 3] = ["68%", "95%", "99.7%"];

/// A tick on the x-axis at an integer multiple of σ from the mean.
#[derive(Debug, Clone, PartialEq)]
pub struct TickMark {
    /// Signed multiple of σ from the mean (0 at the mean itself).
    pub offset: i32,
    pub x: f64,
    /// Top of the dashed vertical guide drawn at this tick.
    pub guide_height: f64,
}

impl TickMark {
    /// Symbolic label: "μ" at the mean, otherwise "μ+kσ" / "μ-kσ".
    pub fn symbol_label(&self) -> String {
        if self.offset == 0 {
            "μ".to_string()
        } else {
            format!("μ{:+}σ", self.offset)
        }
    }

    /// Numeric label for the tick position.
    pub fn value_label(&self) -> String {
        format_value(self.x)
    }
}

/// One empirical-rule band: the double-headed arrow spanning μ ± reach·σ.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    /// Half-width of the band in multiples of σ (1, 2, or 3).
    pub reach: u32,
    /// Height at which the arrow is drawn.
    pub height: f64,
    pub label: &'static str,
}

/// The full annotation overlay for one rendered chart.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationLayout {
    pub ticks: Vec<TickMark>,
    pub bands: [Band; 3],
}

impl AnnotationLayout {
    /// Compute tick and band geometry for `nsd` tick marks each side of the
    /// mean.
    ///
    /// Guide heights follow the density "just beyond" the matching σ
    /// boundary, scaled by [`BAND_CLEARANCE`] (the `clearance` argument):
    /// the mean's guide reaches the curve peak, ±1σ/±2σ/±3σ guides sit at
    /// their band-arrow heights, and ticks farther out get a low guide
    /// scaled from the density at the tick itself.
    pub fn compute(
        normal: &Normal,
        grid: &SampleGrid,
        nsd: u32,
        clearance: [f64; 3],
    ) -> Self {
        let nsd = nsd as i32;

        let ticks = (-nsd..=nsd)
            .map(|offset| {
                let x = normal.mean + offset as f64 * normal.std_dev;
                TickMark {
                    offset,
                    x,
                    guide_height: guide_height(normal, grid, offset, clearance),
                }
            })
            .collect();

        let bands = std::array::from_fn(|i| {
            let reach = i as u32 + 1;
            Band {
                reach,
                height: band_height(normal, grid, reach, clearance),
                label: BAND_LABELS[i],
            }
        });

        Self { ticks, bands }
    }
}

/// Height of the arrow for the band reaching μ ± reach·σ.
fn band_height(normal: &Normal, grid: &SampleGrid, reach: u32, clearance: [f64; 3]) -> f64 {
    let boundary = normal.mean + reach as f64 * normal.std_dev;
    let density = grid
        .density_at_or_after(boundary)
        .unwrap_or_else(|| normal.pdf(boundary));
    density * clearance[(reach as usize - 1).min(clearance.len() - 1)]
}

fn guide_height(normal: &Normal, grid: &SampleGrid, offset: i32, clearance: [f64; 3]) -> f64 {
    let magnitude = offset.unsigned_abs();
    match magnitude {
        0 => grid.max_density(),
        1..=3 => band_height(normal, grid, magnitude, clearance),
        _ => {
            // Past 3σ the density is negligible; a short guide keeps the
            // outermost ticks visually anchored without reaching any band.
            let x = normal.mean + offset as f64 * normal.std_dev;
            let density = grid.density_at_or_after(x).unwrap_or_else(|| normal.pdf(x));
            density * clearance[0]
        }
    }
}

/// Format a tick value with no trailing float noise ("2", "-2.5").
pub fn format_value(value: f64) -> String {
    let rounded = (value * 1e9).round() / 1e9;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_layout(nsd: u32) -> AnnotationLayout {
        let normal = Normal::standard();
        let grid = SampleGrid::compute(&normal, 100_000);
        AnnotationLayout::compute(&normal, &grid, nsd, BAND_CLEARANCE)
    }

    #[test]
    fn test_tick_positions_default_span() {
        let layout = standard_layout(4);

        let positions: Vec<f64> = layout.ticks.iter().map(|t| t.x).collect();
        assert_eq!(
            positions,
            vec![-4.0, -3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0]
        );
    }

    #[test]
    fn test_tick_positions_scale_with_sigma() {
        let normal = Normal::new(10.0, 2.0);
        let grid = SampleGrid::compute(&normal, 10_000);
        let layout = AnnotationLayout::compute(&normal, &grid, 2, BAND_CLEARANCE);

        let positions: Vec<f64> = layout.ticks.iter().map(|t| t.x).collect();
        assert_eq!(positions, vec![6.0, 8.0, 10.0, 12.0, 14.0]);
    }

    #[test]
    fn test_symbol_labels() {
        let layout = standard_layout(4);

        let labels: Vec<String> = layout.ticks.iter().map(|t| t.symbol_label()).collect();
        assert_eq!(
            labels,
            vec![
                "μ-4σ", "μ-3σ", "μ-2σ", "μ-1σ", "μ", "μ+1σ", "μ+2σ", "μ+3σ", "μ+4σ"
            ]
        );
    }

    #[test]
    fn test_value_labels_trim_float_noise() {
        let layout = standard_layout(4);
        let labels: Vec<String> = layout.ticks.iter().map(|t| t.value_label()).collect();
        assert_eq!(labels, vec!["-4", "-3", "-2", "-1", "0", "1", "2", "3", "4"]);

        let normal = Normal::new(0.0, 0.5);
        let grid = SampleGrid::compute(&normal, 1000);
        let halves = AnnotationLayout::compute(&normal, &grid, 1, BAND_CLEARANCE);
        let labels: Vec<String> = halves.ticks.iter().map(|t| t.value_label()).collect();
        assert_eq!(labels, vec!["-0.5", "0", "0.5"]);
    }

    #[test]
    fn test_band_labels_and_reach() {
        let layout = standard_layout(4);

        let summary: Vec<(u32, &str)> =
            layout.bands.iter().map(|b| (b.reach, b.label)).collect();
        assert_eq!(summary, vec![(1, "68%"), (2, "95%"), (3, "99.7%")]);
    }

    #[test]
    fn test_arrow_heights_decrease_outward() {
        // 1.3·f(1σ) > 2.5·f(2σ) > 10·f(3σ): the wider bands sit lower, all
        // below the curve peak.
        let layout = standard_layout(4);
        let [b1, b2, b3] = &layout.bands;

        assert!(b1.height > b2.height);
        assert!(b2.height > b3.height);

        let peak = Normal::standard().peak_density();
        assert!(b1.height < peak);
    }

    #[test]
    fn test_guide_heights() {
        let normal = Normal::standard();
        let layout = standard_layout(4);

        let by_offset = |k: i32| {
            layout
                .ticks
                .iter()
                .find(|t| t.offset == k)
                .map(|t| t.guide_height)
                .unwrap_or(f64::NAN)
        };

        // Mean guide reaches the curve peak.
        assert!((by_offset(0) - normal.peak_density()).abs() < 1e-6);

        // Symmetric ticks share the height of their band arrow.
        assert_eq!(by_offset(-2), by_offset(2));
        assert!((by_offset(1) - layout.bands[0].height).abs() < 1e-12);
        assert!((by_offset(3) - layout.bands[2].height).abs() < 1e-12);

        // Outermost ticks get a low guide, below every band.
        assert!(by_offset(4) < layout.bands[2].height);
        assert!(by_offset(4) > 0.0);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let a = standard_layout(4);
        let b = standard_layout(4);
        assert_eq!(a, b);
    }

    #[test]
    fn test_bands_present_even_with_narrow_tick_span() {
        let layout = standard_layout(1);
        assert_eq!(layout.ticks.len(), 3);
        assert_eq!(layout.bands.len(), 3);
    }
}
