//! Activity panel and footer
//!
//! Renders recent events below the active screen.

use crate::events::{Event, EventType, Source};
use crate::logging::LogLevel;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};
use std::collections::VecDeque;

pub fn source_color(source: Source) -> Color {
    match source {
        Source::Form => Color::Yellow,
        Source::Session => Color::Cyan,
        Source::Navigator => Color::Green,
    }
}

/// `HH:MM:SS` out of a `YYYY-MM-DD HH:MM:SS` timestamp.
pub fn format_compact_timestamp(timestamp: &str) -> String {
    timestamp
        .split(' ')
        .nth(1)
        .unwrap_or(timestamp)
        .to_string()
}

pub fn render_activity_panel(f: &mut Frame, area: Rect, activity: &VecDeque<Event>) {
    // Borders plus padding take three rows
    let capacity = (area.height.saturating_sub(3) as usize).max(1);

    let lines: Vec<Line> = activity
        .iter()
        .filter(|event| event.should_display())
        .rev()
        .take(capacity)
        .map(|event| {
            let icon = match (event.event_type, event.log_level) {
                (EventType::Success, _) => "✅",
                (EventType::Error, LogLevel::Error) => "❌",
                (EventType::Error, _) => "⚠",
                (EventType::Waiting, _) => "…",
                (EventType::Cancelled, _) => "⨯",
                (EventType::Navigation, _) => "→",
            };
            Line::from(vec![
                Span::raw(format!("{} ", icon)),
                Span::styled(
                    format!("{} ", format_compact_timestamp(&event.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    event.msg.clone(),
                    Style::default().fg(source_color(event.source)),
                ),
            ])
        })
        .collect();

    let paragraph = if lines.is_empty() {
        Paragraph::new(vec![Line::from("Waiting for input...")])
    } else {
        Paragraph::new(lines)
    };

    let block = Block::default()
        .title("ACTIVITY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(paragraph.block(block).wrap(Wrap { trim: true }), area);
}

pub fn render_footer(f: &mut Frame, area: Rect) {
    let footer_text = format!(
        "[Tab] Next | [Enter] Select | [Ctrl+R] Show password | [Esc] Cancel/Quit | v{}",
        env!("CARGO_PKG_VERSION")
    );

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
