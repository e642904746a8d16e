use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use empirule_core::{Normal, RenderOptions};

use crate::components::{charts, status_bar};
use crate::export;
use crate::state::AppState;

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(normal: Normal, options: RenderOptions, overlay: bool) -> Self {
        Self {
            state: AppState::new(normal, options, overlay),
        }
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(2)])
            .split(frame.area());

        charts::render_density_chart(frame, chunks[0], &self.state);
        status_bar::render(frame, chunks[1], &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.state.exit = true;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
            }
            KeyCode::Char('a') => {
                self.state.toggle_annotations();
                let message = if self.state.options.annotations {
                    "Annotations on"
                } else {
                    "Annotations off"
                };
                self.state.set_status(message);
            }
            KeyCode::Char('h') => {
                self.state.toggle_overlay();
                let message = if self.state.overlay.is_some() {
                    "Sample overlay on"
                } else {
                    "Sample overlay off"
                };
                self.state.set_status(message);
            }
            KeyCode::Char('s') => {
                self.save_chart();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.state.adjust_nsd(1);
                self.state
                    .set_status(format!("Tick span: ±{}σ", self.state.options.nsd));
            }
            KeyCode::Char('-') => {
                self.state.adjust_nsd(-1);
                self.state
                    .set_status(format!("Tick span: ±{}σ", self.state.options.nsd));
            }
            _ => {
                self.state.clear_messages();
            }
        }
    }

    fn save_chart(&mut self) {
        let path = self.state.options.output_file.clone();
        match export::render_png(
            &self.state.scene,
            &self.state.options,
            self.state.overlay.as_deref(),
            &path,
        ) {
            Ok(()) => {
                tracing::info!("chart saved to {}", path.display());
                self.state
                    .set_status(format!("Saved chart to {}", path.display()));
            }
            Err(err) => {
                tracing::error!("failed to save chart: {err}");
                self.state.set_error(format!("could not save chart: {err}"));
            }
        }
    }
}
