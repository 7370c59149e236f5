//! Game detail screen rendering
//!
//! Read-only panel for a single game record with its download link. The
//! download count is part of the record but is not shown.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::data::DetailRecord;

/// Placeholder shown when the payload held no record
pub const NO_GAME_DATA: &str = "No game data available";

/// Creates a labelled field line
fn field_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}: ", label),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value.to_string()),
    ])
}

/// Renders `record`, or the placeholder when it is `None`
pub fn render(frame: &mut Frame, area: Rect, record: Option<&DetailRecord>, download_base: &str) {
    let block = Block::default()
        .title(" Game ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(record) = record else {
        let placeholder =
            Paragraph::new(Span::styled(NO_GAME_DATA, Style::default().fg(Color::Gray)))
                .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            record.filename.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field_line("Author", &record.author),
        field_line("License", &record.license),
        field_line("Description", &record.description),
        field_line("Access Level", &record.access_level),
        field_line("Likes", &record.likes),
        Line::from(""),
        Line::from(vec![
            Span::styled("Download: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                record.download_path(download_base),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
