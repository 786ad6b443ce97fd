//! Placeholder screens for the routes reachable from the login form.

use crate::navigation::Route;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

const PANEL_WIDTH: u16 = 56;

pub fn render_destination(f: &mut Frame, area: Rect, route: Route) {
    let (accent, body) = match route {
        Route::Home => (Color::Green, "You are signed in."),
        Route::ForgotPassword => (Color::Yellow, "Password recovery is not available yet."),
        Route::SignUp => (Color::Magenta, "Account registration is not available yet."),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(9),
            Constraint::Fill(1),
        ])
        .split(area);
    let column = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(PANEL_WIDTH.min(area.width)),
            Constraint::Fill(1),
        ])
        .split(chunks[1]);

    let text = vec![
        Line::styled(
            route.announcement(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(body),
        Line::from(""),
        Line::styled("[Esc] Back to login", Style::default().fg(Color::DarkGray)),
    ];

    let panel = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(route.to_string())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent))
                .padding(Padding::uniform(1)),
        );
    f.render_widget(panel, column[1]);
}
