//! Density curve chart with empirical-rule annotations.
//!
//! Renders the Gaussian density as a filled silhouette using eighth-block
//! characters, with dashed guide lines, double-headed band arrows, and a
//! two-row σ-tick axis when annotations are enabled.

use empirule_core::grid::SampleGrid;
use empirule_core::histogram;
use empirule_core::{AnnotationLayout, Band};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::AppState;
use crate::util::format::format_mu_sigma;

/// Block characters for sub-character precision (from empty to full)
const BIN_CHARS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

const CURVE_COLOR: Color = Color::Cyan;
const OVERLAY_COLOR: Color = Color::DarkGray;
const GUIDE_COLOR: Color = Color::Gray;

/// Headroom above the tallest density so the peak never touches the header.
const Y_HEADROOM: f64 = 1.08;

/// Arrow colors per band, innermost first (the original's lime/blue/red).
fn band_color(reach: u32) -> Color {
    match reach {
        1 => Color::Green,
        2 => Color::Blue,
        _ => Color::Red,
    }
}

#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    color: Color,
    bold: bool,
}

impl Cell {
    const BLANK: Cell = Cell {
        ch: ' ',
        color: Color::Reset,
        bold: false,
    };

    fn is_blank(&self) -> bool {
        self.ch == ' '
    }
}

/// Render the full chart (header, curve, annotations, axis) into `area`.
pub fn render_density_chart(frame: &mut Frame, area: Rect, state: &AppState) {
    let annotations = state.scene.layout.is_some();
    let header_rows: u16 = if annotations { 3 } else { 2 };
    let axis_rows: u16 = if annotations { 3 } else { 1 };

    let width = area.width as usize;
    let curve_rows = area.height.saturating_sub(header_rows + axis_rows) as usize;

    if curve_rows < 3 || width < 20 {
        let msg = Paragraph::new("Area too small").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(msg, area);
        return;
    }

    render_header(frame, area, state, annotations);

    let grid = &state.scene.grid;
    let y_max = chart_y_max(state);
    let height_units = curve_rows * 8;

    let mut cells = vec![vec![Cell::BLANK; width]; curve_rows];

    if let Some(samples) = &state.overlay {
        let heights = overlay_heights(samples, grid, width, y_max, height_units);
        paint_silhouette(&mut cells, &heights, OVERLAY_COLOR);
    }

    let heights = curve_heights(grid, width, y_max, height_units);
    paint_silhouette(&mut cells, &heights, CURVE_COLOR);

    if let Some(layout) = &state.scene.layout {
        paint_guides(&mut cells, layout, grid, y_max);
        for band in layout.bands.iter().rev() {
            paint_arrow(&mut cells, band, grid, y_max);
        }
    }

    let curve_area = Rect::new(area.x, area.y + header_rows, area.width, curve_rows as u16);
    let lines: Vec<Line> = cells.iter().map(|row| cells_to_line(row)).collect();
    frame.render_widget(Paragraph::new(lines), curve_area);

    render_axis(frame, area, state, header_rows + curve_rows as u16);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, annotations: bool) {
    let mut title_style = Style::default();
    if state.options.title_bold {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    let mut lines = vec![
        Line::from(Span::styled(state.options.title.clone(), title_style)),
        Line::from(format_mu_sigma(&state.normal)),
    ];
    if annotations {
        lines.push(Line::from(state.options.subtitle.clone()));
    }

    let header_area = Rect::new(area.x, area.y, area.width, lines.len() as u16);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        header_area,
    );
}

/// Vertical scale: the tallest thing on the chart plus a little headroom.
fn chart_y_max(state: &AppState) -> f64 {
    let grid = &state.scene.grid;
    let mut tallest = grid.max_density();

    if let Some(samples) = &state.overlay {
        let bins = 64;
        let counts = histogram::bin_counts(samples, bins, grid.min_x(), grid.max_x());
        let bin_width = (grid.max_x() - grid.min_x()) / bins as f64;
        for count in counts {
            tallest = tallest.max(histogram::count_to_density(count, samples.len(), bin_width));
        }
    }

    tallest * Y_HEADROOM
}

fn col_of(x: f64, grid: &SampleGrid, width: usize) -> usize {
    let range = grid.max_x() - grid.min_x();
    let frac = (x - grid.min_x()) / range;
    ((frac * width as f64) as usize).min(width - 1)
}

/// Fill height in eighth-units for each column, taking the maximum density
/// over the column's x-range so a narrow peak is never skipped.
fn curve_heights(
    grid: &SampleGrid,
    width: usize,
    y_max: f64,
    height_units: usize,
) -> Vec<usize> {
    let mut max_density = vec![0.0_f64; width];
    for (x, density) in grid.points() {
        let col = col_of(x, grid, width);
        max_density[col] = max_density[col].max(density);
    }

    max_density
        .iter()
        .map(|&d| ((d / y_max) * height_units as f64).round() as usize)
        .collect()
}

/// One histogram bin per column, scaled to density units.
fn overlay_heights(
    samples: &[f64],
    grid: &SampleGrid,
    width: usize,
    y_max: f64,
    height_units: usize,
) -> Vec<usize> {
    let counts = histogram::bin_counts(samples, width, grid.min_x(), grid.max_x());
    let bin_width = (grid.max_x() - grid.min_x()) / width as f64;

    counts
        .iter()
        .map(|&c| {
            let density = histogram::count_to_density(c, samples.len(), bin_width);
            ((density / y_max) * height_units as f64).round() as usize
        })
        .collect()
}

fn paint_silhouette(cells: &mut [Vec<Cell>], heights: &[usize], color: Color) {
    let rows = cells.len();
    for (row, row_cells) in cells.iter_mut().enumerate() {
        let row_base = (rows - 1 - row) * 8;
        let row_top = row_base + 8;

        for (col, &bar_h) in heights.iter().enumerate() {
            let ch = if bar_h >= row_top {
                '█'
            } else if bar_h > row_base {
                BIN_CHARS[(bar_h - row_base).min(8)]
            } else {
                ' '
            };

            if ch != ' ' {
                row_cells[col] = Cell {
                    ch,
                    color,
                    bold: false,
                };
            }
        }
    }
}

/// Dashed vertical guides from the axis up to each tick's guide height.
/// Only blank cells are painted, so the guides vanish inside the filled
/// curve exactly where the silhouette covers them.
fn paint_guides(cells: &mut [Vec<Cell>], layout: &AnnotationLayout, grid: &SampleGrid, y_max: f64) {
    let rows = cells.len();
    let width = cells[0].len();
    let height_units = rows * 8;

    for tick in &layout.ticks {
        if tick.x < grid.min_x() || tick.x > grid.max_x() {
            continue;
        }
        let col = col_of(tick.x, grid, width);
        let guide_units = ((tick.guide_height / y_max) * height_units as f64).round() as usize;

        for row in 0..rows {
            let cell_base = (rows - 1 - row) * 8;
            if cell_base < guide_units && cells[row][col].is_blank() {
                cells[row][col] = Cell {
                    ch: '┊',
                    color: GUIDE_COLOR,
                    bold: false,
                };
            }
        }
    }
}

/// Double-headed arrow spanning μ ± reach·σ with the percentage label boxed
/// in the middle.
fn paint_arrow(cells: &mut [Vec<Cell>], band: &Band, grid: &SampleGrid, y_max: f64) {
    let rows = cells.len();
    let width = cells[0].len();
    let height_units = rows * 8;

    let units = ((band.height / y_max) * height_units as f64).round() as usize;
    let row = rows - 1 - (units / 8).min(rows - 1);

    let mean = (grid.min_x() + grid.max_x()) / 2.0;
    let sigma = (grid.max_x() - grid.min_x()) / (2.0 * SampleGrid::SPAN_SIGMAS);
    let left = col_of(mean - band.reach as f64 * sigma, grid, width);
    let right = col_of(mean + band.reach as f64 * sigma, grid, width);
    if right <= left + 1 {
        return;
    }

    let color = band_color(band.reach);
    for col in left..=right {
        cells[row][col] = Cell {
            ch: '─',
            color,
            bold: false,
        };
    }
    cells[row][left].ch = '◄';
    cells[row][right].ch = '►';

    let label: Vec<char> = format!("┤ {} ├", band.label).chars().collect();
    let center = (left + right) / 2;
    let start = center.saturating_sub(label.len() / 2);
    for (i, &ch) in label.iter().enumerate() {
        let col = start + i;
        if col < width {
            cells[row][col] = Cell {
                ch,
                color,
                bold: true,
            };
        }
    }
}

fn cells_to_line(row: &[Cell]) -> Line<'static> {
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_style: Option<(Color, bool)> = None;

    for cell in row {
        let style = (cell.color, cell.bold);
        if run_style != Some(style) {
            if let Some((color, bold)) = run_style {
                spans.push(styled_span(std::mem::take(&mut run), color, bold));
            }
            run_style = Some(style);
        }
        run.push(cell.ch);
    }
    if let Some((color, bold)) = run_style {
        spans.push(styled_span(run, color, bold));
    }

    Line::from(spans)
}

fn styled_span(text: String, color: Color, bold: bool) -> Span<'static> {
    let mut style = Style::default().fg(color);
    if bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    Span::styled(text, style)
}

/// Bottom axis: a baseline with `┴` notches, then numeric and symbolic
/// label rows when annotations are on.
fn render_axis(frame: &mut Frame, area: Rect, state: &AppState, y_offset: u16) {
    let width = area.width as usize;
    let grid = &state.scene.grid;

    let mut baseline: Vec<char> = vec!['─'; width];
    let mut value_row: Vec<char> = vec![' '; width];
    let mut symbol_row: Vec<char> = vec![' '; width];

    if let Some(layout) = &state.scene.layout {
        for tick in &layout.ticks {
            if tick.x < grid.min_x() || tick.x > grid.max_x() {
                continue;
            }
            let col = col_of(tick.x, grid, width);
            baseline[col] = '┴';
            write_centered(&mut value_row, col, &tick.value_label());
            write_centered(&mut symbol_row, col, &tick.symbol_label());
        }
    }

    let mut lines = vec![Line::from(String::from_iter(baseline))];
    if state.scene.layout.is_some() {
        lines.push(Line::from(Span::styled(
            String::from_iter(value_row),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(String::from_iter(symbol_row)));
    }

    let axis_area = Rect::new(area.x, area.y + y_offset, area.width, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines), axis_area);
}

fn write_centered(row: &mut [char], col: usize, text: &str) {
    let chars: Vec<char> = text.chars().collect();
    let start = col.saturating_sub(chars.len() / 2);
    for (i, &ch) in chars.iter().enumerate() {
        if let Some(slot) = row.get_mut(start + i) {
            *slot = ch;
        }
    }
}
