//! Transcript area
//!
//! Displays the dialog: chat messages, server notices (visually distinct),
//! and local status lines.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::{App, app::EntryKind};

const BORDER_SIZE: u16 = 2;

/// Render the transcript area.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let title = match app.connection_state() {
        crate::app::ConnectionState::Connected { screen_name } => {
            format!(" Chatter - {screen_name} ")
        },
        _ => " Chatter ".to_string(),
    };

    let block = Block::default().borders(Borders::ALL).title(title);

    let items: Vec<ListItem> = app
        .transcript()
        .iter()
        .map(|entry| {
            let style = match entry.kind {
                EntryKind::Chat => Style::default(),
                EntryKind::Notice => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                EntryKind::Status => {
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
                },
            };

            ListItem::new(Line::from(Span::styled(entry.text.clone(), style)))
        })
        .collect();

    let visible_height = area.height.saturating_sub(BORDER_SIZE) as usize;
    let skip = items.len().saturating_sub(visible_height);
    let visible_items: Vec<_> = items.into_iter().skip(skip).collect();

    let list = List::new(visible_items).block(block);

    frame.render_widget(list, area);
}
