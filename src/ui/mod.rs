//! UI rendering module for the game menu
//!
//! This module contains all the rendering logic for the terminal user interface,
//! using the ratatui library for TUI components. Rendering is a pure projection
//! of the navigator's current screen.

pub mod detail;
pub mod help_overlay;
pub mod menu;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::data::Screen;
use crate::fetch::FetchSource;

/// Renders the whole UI for the current application state
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Breadcrumb
            Constraint::Min(3),    // Screen
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_header(frame, app, chunks[0]);

    let navigator = app.navigator();
    if navigator.is_loading() {
        render_loading(frame, chunks[1]);
    } else {
        match navigator.screen() {
            Screen::Empty => render_loading(frame, chunks[1]),
            Screen::Menu { depth, items } => {
                menu::render(frame, chunks[1], *depth, items, app.selected_index)
            }
            Screen::Detail(record) => {
                detail::render(frame, chunks[1], record.as_ref(), &app.download_base)
            }
        }
    }

    render_footer(frame, app, chunks[2]);

    if app.show_help {
        help_overlay::render(frame);
    }
}

/// Renders a loading message while data is being fetched
fn render_loading(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(area);

    let loading_text = Paragraph::new("Loading data...")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);

    frame.render_widget(loading_text, chunks[1]);
}

/// Renders the title and the path to the current screen
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        "GAME MENU",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    for name in app.breadcrumb() {
        spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(name.to_string()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Label describing degraded data, if any
fn source_label(source: Option<FetchSource>) -> Option<&'static str> {
    match source {
        Some(FetchSource::StaleCache) => Some("offline: showing cached data"),
        Some(FetchSource::Default) => Some("offline: no data"),
        _ => None,
    }
}

/// Renders key hints; the back hint only appears when going back is possible
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let navigator = app.navigator();
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::new();
    if navigator.back_visible() {
        spans.push(Span::styled("Esc", key_style));
        spans.push(Span::styled(" back  ", text_style));
    }
    spans.push(Span::styled("r", key_style));
    spans.push(Span::styled(" refresh  ", text_style));
    spans.push(Span::styled("?", key_style));
    spans.push(Span::styled(" help  ", text_style));
    spans.push(Span::styled("q", key_style));
    spans.push(Span::styled(" quit", text_style));

    if let Some(label) = source_label(navigator.last_source()) {
        spans.push(Span::styled(
            format!("  [{}]", label),
            Style::default().fg(Color::Red),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::StartupConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn offline_app() -> App {
        let config = StartupConfig {
            use_cache: false,
            ..StartupConfig::default()
        };
        App::new(&config)
    }

    #[test]
    fn test_initial_render_shows_loading_and_no_back_hint() {
        let app = offline_app();
        let content = draw(&app);

        assert!(content.contains("GAME MENU"));
        assert!(content.contains("Loading data..."));
        assert!(content.contains("refresh"));
        assert!(!content.contains("back"));
    }

    #[test]
    fn test_help_overlay_is_drawn_on_top() {
        let mut app = offline_app();
        app.show_help = true;

        assert!(draw(&app).contains("Keyboard Shortcuts"));
    }

    #[test]
    fn test_source_label() {
        assert_eq!(source_label(None), None);
        assert_eq!(source_label(Some(FetchSource::Live)), None);
        assert_eq!(source_label(Some(FetchSource::Cache)), None);
        assert!(source_label(Some(FetchSource::StaleCache)).is_some());
        assert!(source_label(Some(FetchSource::Default)).is_some());
    }
}
