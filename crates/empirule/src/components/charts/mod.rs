//! Chart components for data visualization.

mod density;

pub use density::render_density_chart;
