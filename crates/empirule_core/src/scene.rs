//! The fully computed, render-ready description of one chart.

use crate::annotations::AnnotationLayout;
use crate::distribution::Normal;
use crate::grid::SampleGrid;
use crate::options::RenderOptions;

/// Everything a renderer needs: the distribution, its sampled curve, and
/// (when annotations are enabled) the tick/band geometry.
///
/// Composing a scene twice from identical inputs yields identical scenes,
/// which is what makes regression tests on the rendered output meaningful.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityScene {
    pub normal: Normal,
    pub grid: SampleGrid,
    /// `None` when annotations are disabled: bare curve only.
    pub layout: Option<AnnotationLayout>,
}

impl DensityScene {
    pub fn compose(normal: &Normal, options: &RenderOptions) -> Self {
        let grid = SampleGrid::compute(normal, options.samples);
        let layout = options.annotations.then(|| {
            AnnotationLayout::compute(normal, &grid, options.nsd, options.band_clearance)
        });

        Self {
            normal: *normal,
            grid,
            layout,
        }
    }
}
