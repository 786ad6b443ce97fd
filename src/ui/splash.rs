//! Splash screen rendering module.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const LOGO_NAME: &str = r#"
  ██╗        ██████╗    ██████╗   ██╗  ███╗   ██╗
  ██║       ██╔═══██╗  ██╔════╝   ██║  ████╗  ██║
  ██║       ██║   ██║  ██║  ███╗  ██║  ██╔██╗ ██║
  ██║       ██║   ██║  ██║   ██║  ██║  ██║╚██╗██║
  ███████╗  ╚██████╔╝  ╚██████╔╝  ██║  ██║ ╚████║
  ╚══════╝   ╚═════╝    ╚═════╝   ╚═╝  ╚═╝  ╚═══╝
"#;

pub fn render_splash(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = LOGO_NAME
        .trim_matches('\n')
        .lines()
        .map(|line| {
            Span::styled(
                line.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .into()
        })
        .collect();

    lines.push(Line::from(Span::raw(" ")));
    lines.push(
        Span::styled(
            format!("Version {}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::ITALIC),
        )
        .into(),
    );
    lines.push(
        Span::styled(
            "Press any key to continue",
            Style::default().fg(Color::DarkGray),
        )
        .into(),
    );

    let logo_height = lines.len() as u16;
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(logo_height),
            Constraint::Fill(1),
        ])
        .split(area);

    let logo = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(logo, vertical_chunks[1]);
}
