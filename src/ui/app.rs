//! Main TUI application state and logic

use crate::inspect::Endianness;
use crate::layout::Specimen;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use super::panes::{
    render_bytes_pane, render_specimen_pane, render_status_bar, BytesRenderData, StatusRenderData,
};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Specimens,
    Bytes,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Specimens => FocusedPane::Bytes,
            FocusedPane::Bytes => FocusedPane::Specimens,
        }
    }
}

/// The main application state
pub struct App {
    /// Values available for inspection
    pub specimens: Vec<Specimen>,

    /// Index of the selected specimen
    pub selected: usize,

    /// Number of leading bytes of the selected specimen being inspected
    pub prefix: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Scroll offset of the byte pane
    pub bytes_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports an error
    pub status_is_error: bool,
}

impl App {
    /// Create a new app browsing `specimens`, starting with the first one fully inspected
    pub fn new(specimens: Vec<Specimen>) -> Self {
        let prefix = specimens.first().map_or(0, Specimen::size);
        App {
            specimens,
            selected: 0,
            prefix,
            focused_pane: FocusedPane::Specimens,
            bytes_scroll: 0,
            should_quit: false,
            status_message: format!("Host is {}", Endianness::native().name()),
            status_is_error: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// The specimen under inspection
    pub fn current(&self) -> Option<&Specimen> {
        self.specimens.get(self.selected)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[0]);

        render_specimen_pane(
            frame,
            columns[0],
            &self.specimens,
            self.selected,
            self.focused_pane == FocusedPane::Specimens,
        );

        if let Some(specimen) = self.specimens.get(self.selected) {
            render_bytes_pane(
                frame,
                columns[1],
                BytesRenderData {
                    specimen,
                    prefix: self.prefix,
                    endianness: Endianness::native(),
                },
                self.focused_pane == FocusedPane::Bytes,
                &mut self.bytes_scroll,
            );
        }

        render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                is_error: self.status_is_error,
                prefix: self.prefix,
                size: self.current().map_or(0, Specimen::size),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Specimens => self.select(self.selected.saturating_sub(1)),
                FocusedPane::Bytes => self.bytes_scroll = self.bytes_scroll.saturating_sub(1),
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Specimens => self.select(self.selected.saturating_add(1)),
                FocusedPane::Bytes => self.bytes_scroll = self.bytes_scroll.saturating_add(1),
            },
            KeyCode::Left => self.set_prefix(self.prefix.saturating_sub(1)),
            KeyCode::Right => self.set_prefix(self.prefix.saturating_add(1)),
            KeyCode::Home => self.set_prefix(0),
            KeyCode::End => {
                let size = self.current().map_or(0, Specimen::size);
                self.set_prefix(size);
            }
            _ => {}
        }
    }

    /// Select a specimen and inspect all of its bytes
    fn select(&mut self, index: usize) {
        if index >= self.specimens.len() {
            return;
        }
        self.selected = index;
        self.bytes_scroll = 0;
        if let Some(specimen) = self.specimens.get(index) {
            self.prefix = specimen.size();
            self.status_message = format!(
                "{}: {} ({} bytes)",
                specimen.label(),
                specimen.kind().name(),
                specimen.size()
            );
            self.status_is_error = false;
        }
    }

    /// Change the inspected prefix; an out-of-bounds length leaves it unchanged
    fn set_prefix(&mut self, length: usize) {
        let Some(specimen) = self.specimens.get(self.selected) else {
            return;
        };
        match specimen.inspect(length) {
            Ok(view) => {
                self.prefix = view.len();
                self.status_message =
                    format!("Inspecting {} of {} bytes", view.len(), specimen.size());
                self.status_is_error = false;
            }
            Err(e) => {
                self.status_message = e.to_string();
                self.status_is_error = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn sample_app() -> App {
        App::new(vec![
            Specimen::int("int 1", 1),
            Specimen::text("\"AB\"", "AB"),
        ])
    }

    #[test]
    fn test_starts_fully_inspected() {
        let app = sample_app();
        assert_eq!(app.selected, 0);
        assert_eq!(app.prefix, 4);
        assert!(!app.status_is_error);
    }

    #[test]
    fn test_growing_past_size_reports_out_of_bounds() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.prefix, 4);
        assert!(app.status_is_error);
        assert!(app.status_message.starts_with("Out of bounds"));

        press(&mut app, KeyCode::Left);
        assert_eq!(app.prefix, 3);
        assert!(!app.status_is_error);

        press(&mut app, KeyCode::Home);
        assert_eq!(app.prefix, 0);
        press(&mut app, KeyCode::End);
        assert_eq!(app.prefix, 4);
    }

    #[test]
    fn test_selection_resets_prefix() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 1);
        assert_eq!(app.prefix, 2);

        // Past the end stays on the last specimen
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_tab_moves_arrows_to_byte_pane() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Bytes);

        // Up/Down scroll the byte pane instead of changing the selection
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 0);
        assert_eq!(app.bytes_scroll, 2);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.bytes_scroll, 1);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Specimens);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 1);
        assert_eq!(app.bytes_scroll, 0);
    }

    #[test]
    fn test_quit() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
