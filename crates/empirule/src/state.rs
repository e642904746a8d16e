//! Application state shared between the event loop and the widgets.

use empirule_core::{DensityScene, Normal, RenderOptions};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Sample count for the empirical-histogram overlay.
pub const OVERLAY_SAMPLES: usize = 10_000;

/// Fixed seed so the overlay is identical across redraws and runs.
const OVERLAY_SEED: u64 = 0x5EED_CAFE;

/// Bounds for the interactive nsd adjustment; the plotted range only
/// covers ±5σ, so ticks past that would fall off the chart.
const MIN_NSD: u32 = 1;
const MAX_NSD: u32 = 5;

pub struct AppState {
    pub normal: Normal,
    pub options: RenderOptions,
    /// Cached curve and annotation geometry; recomputed when the options
    /// change, never per frame.
    pub scene: DensityScene,
    /// Seeded draws backing the histogram overlay; `None` while hidden.
    pub overlay: Option<Vec<f64>>,
    pub status_message: Option<String>,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl AppState {
    pub fn new(normal: Normal, options: RenderOptions, overlay: bool) -> Self {
        let scene = DensityScene::compose(&normal, &options);
        let mut state = Self {
            normal,
            options,
            scene,
            overlay: None,
            status_message: None,
            error_message: None,
            exit: false,
        };
        if overlay {
            state.toggle_overlay();
        }
        state
    }

    fn recompose(&mut self) {
        self.scene = DensityScene::compose(&self.normal, &self.options);
    }

    pub fn toggle_annotations(&mut self) {
        self.options.annotations = !self.options.annotations;
        self.recompose();
    }

    /// Widen or narrow the tick span by one σ, clamped to [1, 5].
    pub fn adjust_nsd(&mut self, delta: i32) {
        let nsd = self
            .options
            .nsd
            .saturating_add_signed(delta)
            .clamp(MIN_NSD, MAX_NSD);
        if nsd != self.options.nsd {
            self.options.nsd = nsd;
            self.recompose();
        }
    }

    /// Show or hide the sampled-histogram overlay.
    pub fn toggle_overlay(&mut self) {
        if self.overlay.is_some() {
            self.overlay = None;
            return;
        }

        let mut rng = SmallRng::seed_from_u64(OVERLAY_SEED);
        let samples = self.normal.sample(&mut rng, OVERLAY_SAMPLES);
        if samples.is_empty() {
            tracing::warn!(
                "overlay sampling rejected parameters (mean={}, std_dev={})",
                self.normal.mean,
                self.normal.std_dev
            );
        }
        self.overlay = Some(samples);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.error_message = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
        self.status_message = None;
    }

    pub fn clear_messages(&mut self) {
        self.status_message = None;
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_state() -> AppState {
        let options = RenderOptions {
            samples: 1000,
            ..Default::default()
        };
        AppState::new(Normal::standard(), options, false)
    }

    #[test]
    fn test_overlay_toggle_is_reproducible() {
        let mut a = small_state();
        let mut b = small_state();

        a.toggle_overlay();
        b.toggle_overlay();
        assert_eq!(a.overlay, b.overlay);
        assert_eq!(a.overlay.as_ref().map(Vec::len), Some(OVERLAY_SAMPLES));

        a.toggle_overlay();
        assert!(a.overlay.is_none());
    }

    #[test]
    fn test_toggle_annotations_recomposes_scene() {
        let mut state = small_state();
        assert!(state.scene.layout.is_some());

        state.toggle_annotations();
        assert!(state.scene.layout.is_none());

        state.toggle_annotations();
        assert!(state.scene.layout.is_some());
    }

    #[test]
    fn test_adjust_nsd_clamps_and_recomposes() {
        let mut state = small_state();

        state.adjust_nsd(1);
        assert_eq!(state.options.nsd, 5);
        assert_eq!(
            state.scene.layout.as_ref().map(|l| l.ticks.len()),
            Some(11)
        );

        for _ in 0..10 {
            state.adjust_nsd(1);
        }
        assert_eq!(state.options.nsd, 5);

        for _ in 0..10 {
            state.adjust_nsd(-1);
        }
        assert_eq!(state.options.nsd, 1);
    }

    #[test]
    fn test_error_and_status_are_exclusive() {
        let mut state = small_state();

        state.set_status("saved");
        state.set_error("boom");
        assert!(state.status_message.is_none());
        assert!(state.error_message.is_some());

        state.set_status("ok");
        assert!(state.error_message.is_none());
    }
}
