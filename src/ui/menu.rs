//! Menu screen rendering
//!
//! Renders the rows of a category, subcategory or item list. Each row shows
//! the item name and its update date; the item depth also shows access level
//! and likes.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::data::{Depth, MenuItem};

/// Placeholder shown for an empty list
pub const NO_DATA: &str = "No data available";

/// Title for the list block at each depth
fn depth_title(depth: Depth) -> &'static str {
    match depth {
        Depth::Categories => " Categories ",
        Depth::Subcategories => " Subcategories ",
        Depth::Items => " Games ",
        Depth::Detail => " Game ",
    }
}

/// The info part of a row, after the name
pub fn row_info(item: &MenuItem, depth: Depth) -> String {
    if depth == Depth::Items {
        format!(
            " | Updated: {} | Access: {} | Likes: {}",
            item.date,
            item.access.as_deref().unwrap_or_default(),
            item.likes.as_deref().unwrap_or_default()
        )
    } else {
        format!(" | Updated: {}", item.date)
    }
}

/// Renders the rows at `depth` with `selected` highlighted
pub fn render(frame: &mut Frame, area: Rect, depth: Depth, items: &[MenuItem], selected: usize) {
    let block = Block::default()
        .title(depth_title(depth))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if items.is_empty() {
        let placeholder = Paragraph::new(Span::styled(NO_DATA, Style::default().fg(Color::Gray)))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    // Keep the selected row in view
    let visible = area.height.saturating_sub(2).max(1) as usize;
    let offset = selected.saturating_sub(visible - 1);

    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, item)| {
            let is_selected = i == selected;
            let (cursor, name_style) = if is_selected {
                (
                    "> ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(Color::White))
            };
            Line::from(vec![
                Span::styled(cursor, name_style),
                Span::styled(item.name.clone(), name_style),
                Span::styled(row_info(item, depth), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
