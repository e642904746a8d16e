//! Normal-distribution density curve computation library
//!
//! This crate computes everything a renderer needs to draw a Gaussian
//! density curve with empirical-rule annotations:
//! - The density function and its closed-form peak
//! - A dense sample grid over [μ − 5σ, μ + 5σ]
//! - Tick positions, "μ±kσ" labels, and guide-line heights
//! - The 68 / 95 / 99.7 % band arrows and their placement
//! - Seeded sampling for the empirical-histogram overlay
//!
//! Rendering itself (terminal or image) lives in the `empirule` crate;
//! nothing here touches a backend, so every quantity is directly testable.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod annotations;
pub mod distribution;
pub mod grid;
pub mod histogram;
pub mod scene;
pub mod special;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod options;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use annotations::{AnnotationLayout, BAND_CLEARANCE, BAND_LABELS, Band, TickMark};
pub use distribution::Normal;
pub use grid::SampleGrid;
pub use options::RenderOptions;
pub use scene::DensityScene;
