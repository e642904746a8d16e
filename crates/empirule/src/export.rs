//! PNG chart export via plotters.
//!
//! Produces the same chart as the terminal renderer as a raster image:
//! curve over [μ − 5σ, μ + 5σ], hidden y-axis, bottom axis with σ ticks,
//! dashed guide lines, and the boxed empirical-rule arrows.

use std::path::Path;

use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::FontStyle;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use empirule_core::histogram;
use empirule_core::{Band, DensityScene, RenderOptions, TickMark};

use crate::util::format::format_mu_sigma;

/// Output raster size, matching the original 12×6 inch canvas at 100 dpi.
const IMAGE_SIZE: (u32, u32) = (1200, 600);

/// Vertical headroom above the curve peak.
const Y_HEADROOM: f64 = 1.08;

/// Dash segments per guide line.
const GUIDE_DASHES: usize = 24;

/// matplotlib's default curve blue.
const CURVE_COLOR: RGBColor = RGBColor(31, 119, 180);
const OVERLAY_COLOR: RGBColor = RGBColor(200, 200, 200);
const GUIDE_COLOR: RGBColor = RGBColor(128, 128, 128);

type Root<'a> = DrawingArea<BitMapBackend<'a>, Shift>;
type DensityChart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Arrow colors per band, innermost first (lime, blue, red).
fn band_color(reach: u32) -> RGBColor {
    match reach {
        1 => RGBColor(50, 205, 50),
        2 => RGBColor(0, 0, 255),
        _ => RGBColor(255, 0, 0),
    }
}

/// Render `scene` to a PNG file at `path`.
///
/// Any backend or I/O failure propagates to the caller; nothing is retried.
pub fn render_png(
    scene: &DensityScene,
    options: &RenderOptions,
    overlay: Option<&[f64]>,
    path: &Path,
) -> color_eyre::Result<()> {
    let root = BitMapBackend::new(path, IMAGE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let grid = &scene.grid;
    let (min_x, max_x) = (grid.min_x(), grid.max_x());
    let y_max = grid.max_density() * Y_HEADROOM;

    let annotations = scene.layout.is_some();
    let header_px = if annotations { 64 } else { 48 };
    let label_area = if annotations { 44 } else { 16 };

    let mut chart = ChartBuilder::on(&root)
        .margin(12)
        .margin_top(header_px)
        .x_label_area_size(label_area)
        .y_label_area_size(0)
        .build_cartesian_2d(min_x..max_x, 0.0..y_max)?;

    if let Some(samples) = overlay {
        draw_overlay(&mut chart, samples, min_x, max_x)?;
    }

    chart.draw_series(LineSeries::new(grid.points(), CURVE_COLOR.stroke_width(2)))?;

    // Bottom axis line (the only visible spine).
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(min_x, 0.0), (max_x, 0.0)],
        BLACK,
    )))?;

    if let Some(layout) = &scene.layout {
        for tick in &layout.ticks {
            if tick.x < min_x || tick.x > max_x {
                continue;
            }
            draw_guide(&mut chart, tick)?;
            draw_tick_label(&root, &chart, tick)?;
        }
        for band in &layout.bands {
            draw_band_arrow(&root, &mut chart, scene, band, y_max)?;
        }
    }

    draw_header(&root, scene, options, annotations)?;

    root.present()?;
    Ok(())
}

/// Sampled histogram behind the curve, one bar per bin, in density units.
fn draw_overlay(
    chart: &mut DensityChart,
    samples: &[f64],
    min_x: f64,
    max_x: f64,
) -> color_eyre::Result<()> {
    let bins = 100;
    let counts = histogram::bin_counts(samples, bins, min_x, max_x);
    let bin_width = (max_x - min_x) / bins as f64;

    chart.draw_series(counts.iter().enumerate().map(|(i, &count)| {
        let x0 = min_x + i as f64 * bin_width;
        let density = histogram::count_to_density(count, samples.len(), bin_width);
        Rectangle::new([(x0, 0.0), (x0 + bin_width, density)], OVERLAY_COLOR.filled())
    }))?;

    Ok(())
}

/// Dashed vertical guide from the axis to the tick's guide height.
fn draw_guide(chart: &mut DensityChart, tick: &TickMark) -> color_eyre::Result<()> {
    let dash = tick.guide_height / (2 * GUIDE_DASHES) as f64;

    chart.draw_series((0..GUIDE_DASHES).map(|i| {
        let y0 = 2.0 * i as f64 * dash;
        PathElement::new(vec![(tick.x, y0), (tick.x, y0 + dash)], GUIDE_COLOR)
    }))?;

    Ok(())
}

/// Numeric value and "μ±kσ" symbol under the axis at the tick position.
fn draw_tick_label(
    root: &Root,
    chart: &DensityChart,
    tick: &TickMark,
) -> color_eyre::Result<()> {
    let (px, py) = chart.backend_coord(&(tick.x, 0.0));

    let style = ("sans-serif", 15)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));

    root.draw(&Text::new(tick.value_label(), (px, py + 6), style.clone()))?;
    root.draw(&Text::new(tick.symbol_label(), (px, py + 22), style))?;

    Ok(())
}

/// Double-headed arrow across the band with the percentage label in a
/// white box outlined in the band color.
fn draw_band_arrow(
    root: &Root,
    chart: &mut DensityChart,
    scene: &DensityScene,
    band: &Band,
    y_max: f64,
) -> color_eyre::Result<()> {
    let normal = &scene.normal;
    let reach = band.reach as f64 * normal.std_dev;
    let (left, right) = (normal.mean - reach, normal.mean + reach);
    let y = band.height;
    let color = band_color(band.reach);

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(left, y), (right, y)],
        color.stroke_width(2),
    )))?;

    // Arrow heads
    let head_dx = 0.12 * normal.std_dev;
    let head_dy = y_max * 0.018;
    chart.draw_series(std::iter::once(Polygon::new(
        vec![
            (left, y),
            (left + head_dx, y + head_dy),
            (left + head_dx, y - head_dy),
        ],
        color.filled(),
    )))?;
    chart.draw_series(std::iter::once(Polygon::new(
        vec![
            (right, y),
            (right - head_dx, y + head_dy),
            (right - head_dx, y - head_dy),
        ],
        color.filled(),
    )))?;

    // Label box
    let half_w = (0.09 + 0.07 * band.label.len() as f64) * normal.std_dev;
    let half_h = y_max * 0.035;
    let box_coords = [
        (normal.mean - half_w, y - half_h),
        (normal.mean + half_w, y + half_h),
    ];
    chart.draw_series(std::iter::once(Rectangle::new(box_coords, WHITE.filled())))?;
    chart.draw_series(std::iter::once(Rectangle::new(
        box_coords,
        color.stroke_width(2),
    )))?;

    let (px, py) = chart.backend_coord(&(normal.mean, y));
    let style = ("sans-serif", 17)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw(&Text::new(band.label, (px, py), style))?;

    Ok(())
}

/// Title, μ/σ line, and optional subtitle across the top of the image.
fn draw_header(
    root: &Root,
    scene: &DensityScene,
    options: &RenderOptions,
    annotations: bool,
) -> color_eyre::Result<()> {
    let center_x = IMAGE_SIZE.0 as i32 / 2;
    let centered = Pos::new(HPos::Center, VPos::Top);

    let mut title_font = ("sans-serif", options.title_size as f64 * 1.6).into_font();
    if options.title_bold {
        title_font = title_font.style(FontStyle::Bold);
    }
    root.draw(&Text::new(
        options.title.clone(),
        (center_x, 8),
        title_font.color(&BLACK).pos(centered),
    ))?;

    root.draw(&Text::new(
        format_mu_sigma(&scene.normal),
        (center_x, 34),
        ("sans-serif", 15)
            .into_font()
            .color(&BLACK)
            .pos(centered),
    ))?;

    if annotations {
        root.draw(&Text::new(
            options.subtitle.clone(),
            (center_x, 50),
            ("sans-serif", options.subtitle_size as f64 * 1.6)
                .into_font()
                .color(&BLACK)
                .pos(centered),
        ))?;
    }

    Ok(())
}
