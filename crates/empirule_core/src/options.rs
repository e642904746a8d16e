//! Render options with the standard defaults.

use std::path::PathBuf;

use crate::annotations::BAND_CLEARANCE;

/// Presentation options for one rendered chart.
///
/// `Default` reproduces the canonical demo invocation: standard-normal
/// titles, a million samples, four tick marks each side of the mean,
/// annotations on, no persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub title: String,
    pub subtitle: String,
    /// Title font size in points (used by the image exporter).
    pub title_size: u16,
    pub title_bold: bool,
    pub subtitle_size: u16,
    /// Number of x-values the density is sampled at.
    pub samples: usize,
    /// Standard-deviation tick marks drawn each side of the mean.
    pub nsd: u32,
    /// Draw tick marks, guide lines, and empirical-rule arrows.
    pub annotations: bool,
    pub output_file: PathBuf,
    /// Also write the chart to `output_file` as a PNG.
    pub save: bool,
    /// Clearance multipliers for band-arrow placement; see
    /// [`BAND_CLEARANCE`].
    pub band_clearance: [f64; 3],
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Normal distribution".to_string(),
            subtitle: "(Empirical Rule)".to_string(),
            title_size: 14,
            title_bold: true,
            subtitle_size: 12,
            samples: 1_000_000,
            nsd: 4,
            annotations: true,
            output_file: PathBuf::from("normal_distribution.png"),
            save: false,
            band_clearance: BAND_CLEARANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo_invocation() {
        let options = RenderOptions::default();

        assert_eq!(options.title, "Normal distribution");
        assert_eq!(options.subtitle, "(Empirical Rule)");
        assert_eq!(options.title_size, 14);
        assert!(options.title_bold);
        assert_eq!(options.subtitle_size, 12);
        assert_eq!(options.samples, 1_000_000);
        assert_eq!(options.nsd, 4);
        assert!(options.annotations);
        assert_eq!(options.output_file, PathBuf::from("normal_distribution.png"));
        assert!(!options.save);
        assert_eq!(options.band_clearance, [1.3, 2.5, 10.0]);
    }
}
