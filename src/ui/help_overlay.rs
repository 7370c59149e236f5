//! Keybinding help, drawn as a modal over the current screen

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const OVERLAY_WIDTH: u16 = 52;

/// Sections of the overlay, each a heading and its `(keys, action)` rows
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("↑/k, ↓/j", "Move selection"),
            ("Enter", "Open category / game"),
            ("Esc/Backspace/b", "Back one screen"),
        ],
    ),
    (
        "Other",
        &[
            ("r", "Reload categories from server"),
            ("?", "Toggle this help"),
            ("q", "Quit"),
        ],
    ),
];

pub fn render(frame: &mut Frame) {
    let lines = help_lines();
    // Content plus top and bottom border
    let height = lines.len() as u16 + 2;
    let area = centered_rect(OVERLAY_WIDTH, height, frame.area());

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);

    let mut lines = Vec::new();
    for (title, rows) in SECTIONS {
        lines.push(Line::from(Span::styled(*title, heading)));
        lines.extend(rows.iter().map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("  {:<16}", keys), key_style),
                Span::raw(*action),
            ])
        }));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        "Esc, ? or q closes this window",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(render).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_help_overlay_renders() {
        let content = rendered(80, 24);

        assert!(content.contains("Help"), "Should render help title");
        assert!(content.contains("Navigation"), "Should show navigation section");
        assert!(content.contains("Reload"), "Should list the refresh key");
    }

    #[test]
    fn test_help_lists_every_back_key() {
        let content = rendered(80, 24);

        assert!(content.contains("Esc/Backspace/b"), "Should list all back keys");
        assert!(content.contains("Back one screen"));
    }

    #[test]
    fn test_overlay_fits_its_rows() {
        let rows: usize = SECTIONS.iter().map(|(_, rows)| rows.len() + 2).sum();
        assert_eq!(help_lines().len(), rows + 1);

        // Last line of content sits above the bottom border
        let content = rendered(80, 24);
        assert!(content.contains("closes this window"));
    }
}
