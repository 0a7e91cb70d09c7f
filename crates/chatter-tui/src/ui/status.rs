//! Status bar
//!
//! Displays the connection phase, the server address, and any transient
//! status message.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, app::ConnectionState};

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let connection_status = match app.connection_state() {
        ConnectionState::Connecting => {
            Span::styled("Connecting...", Style::default().fg(Color::Yellow))
        },
        ConnectionState::AwaitingName { .. } => {
            Span::styled("Negotiating name...", Style::default().fg(Color::Yellow))
        },
        ConnectionState::Connected { screen_name } => Span::styled(
            format!("Connected as {screen_name}"),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        ConnectionState::Closed => Span::styled("Disconnected", Style::default().fg(Color::Red)),
    };

    let mut spans = vec![
        Span::raw(" "),
        connection_status,
        Span::styled(format!(" | {}", app.server_addr()), Style::default().fg(Color::Gray)),
    ];

    if let Some(message) = app.status_message() {
        spans.push(Span::styled(
            format!(" | {message}"),
            Style::default().fg(Color::White).add_modifier(Modifier::ITALIC),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
