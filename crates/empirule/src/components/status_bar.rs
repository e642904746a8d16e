//! Bottom status line: key help on the left, band coverage on the right.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::AppState;
use crate::util::format::format_coverage_summary;

const HELP_TEXT: &str = "a: annotations | h: overlay | s: save png | +/-: tick span | q: quit";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let content = if let Some(error) = &state.error_message {
        Line::from(vec![
            Span::styled("Error: ", Style::default().fg(Color::Red)),
            Span::raw(error.clone()),
        ])
    } else if let Some(status) = &state.status_message {
        Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from(Span::styled(
            HELP_TEXT,
            Style::default().fg(Color::DarkGray),
        ))
    };

    let coverage = Line::from(Span::styled(
        format_coverage_summary(&state.normal),
        Style::default().fg(Color::Cyan),
    ))
    .right_aligned();

    let block = Block::default().borders(Borders::TOP);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(content), inner);
    frame.render_widget(Paragraph::new(coverage), inner);
}
