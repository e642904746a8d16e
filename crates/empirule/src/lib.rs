//! Normal-distribution density curve viewer
//!
//! Renders the Gaussian density curve with empirical-rule annotations
//! (the 68/95/99.7% bands) in a terminal UI, and exports the same chart
//! as a PNG. All numeric work lives in `empirule_core`; this crate is
//! the presentation and application shell.

pub mod app;
pub mod components;
pub mod export;
pub mod logging;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
