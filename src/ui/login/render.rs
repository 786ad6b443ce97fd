//! Login form renderer

use super::form::{Focus, LoginForm};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const FORM_WIDTH: u16 = 56;
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Renders the login form centred in `area`.
pub fn render_login(f: &mut Frame, area: Rect, form: &LoginForm, is_loading: bool, tick: usize) {
    let has_error = form.error_message().is_some();
    let banner_height = if has_error { 2 } else { 0 };

    let rows = [
        Constraint::Length(2),             // title
        Constraint::Length(banner_height), // error banner
        Constraint::Length(3),             // username
        Constraint::Length(3),             // password
        Constraint::Length(1),             // forgot password
        Constraint::Length(1),
        Constraint::Length(3), // login button
        Constraint::Length(1),
        Constraint::Length(1), // sign up
    ];
    let form_height: u16 = 15 + banner_height;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(form_height),
            Constraint::Fill(1),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(FORM_WIDTH.min(area.width)),
            Constraint::Fill(1),
        ])
        .split(vertical[1]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(rows)
        .split(horizontal[1]);

    let title = Paragraph::new("Welcome Back")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(title, chunks[0]);

    if let Some(message) = form.error_message() {
        let banner = Paragraph::new(message).style(
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        );
        f.render_widget(banner, chunks[1]);
    }

    render_text_field(
        f,
        chunks[2],
        "Username or Email",
        form.username(),
        form.focus() == Focus::Username,
        has_error,
    );
    render_text_field(
        f,
        chunks[3],
        "Password",
        &form.displayed_password(),
        form.focus() == Focus::Password,
        has_error,
    );

    let forgot = Paragraph::new(link_span(
        "Forgot Password?",
        form.focus() == Focus::ForgotPassword,
    ))
    .alignment(Alignment::Right);
    f.render_widget(forgot, chunks[4]);

    render_submit_button(f, chunks[6], form, is_loading, tick);

    let sign_up = Paragraph::new(Line::from(vec![
        Span::styled("Don't have an account? ", Style::default().fg(Color::Gray)),
        link_span("Sign Up", form.focus() == Focus::SignUp),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(sign_up, chunks[8]);
}

fn render_text_field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    is_error: bool,
) {
    let border_color = if is_error {
        Color::LightRed
    } else if focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let field = Paragraph::new(value).block(
        Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(field, area);

    if focused {
        let offset = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(offset)
            .min(area.right().saturating_sub(2));
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn render_submit_button(f: &mut Frame, area: Rect, form: &LoginForm, is_loading: bool, tick: usize) {
    let focused = form.focus() == Focus::Submit;
    let label = if is_loading {
        format!(
            "{} Signing in...",
            SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
        )
    } else {
        "Login".to_string()
    };

    let mut style = if form.can_submit(is_loading) {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray).bg(Color::DarkGray)
    };
    if focused {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        }));
    f.render_widget(button, area);
}

fn link_span(text: &str, focused: bool) -> Span<'_> {
    let style = Style::default()
        .fg(Color::LightBlue)
        .add_modifier(Modifier::UNDERLINED);
    if focused {
        Span::styled(text, style.add_modifier(Modifier::BOLD | Modifier::REVERSED))
    } else {
        Span::styled(text, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(form: &LoginForm, is_loading: bool) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_login(f, area, form, is_loading, 0);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn press(form: &mut LoginForm, code: KeyCode) {
        form.handle_key(KeyEvent::new(code, KeyModifiers::NONE), false);
    }

    #[test]
    fn test_renders_all_form_elements() {
        let text = screen_text(&LoginForm::new(), false);
        for expected in [
            "Welcome Back",
            "Username or Email",
            "Password",
            "Forgot Password?",
            "Login",
            "Don't have an account?",
            "Sign Up",
        ] {
            assert!(text.contains(expected), "missing {expected:?}");
        }
    }

    #[test]
    fn test_password_is_masked_and_error_banner_shown() {
        let mut form = LoginForm::new();
        press(&mut form, KeyCode::Char('a'));
        press(&mut form, KeyCode::Enter);
        for c in "abc".chars() {
            press(&mut form, KeyCode::Char(c));
        }
        press(&mut form, KeyCode::Enter);

        let text = screen_text(&form, false);
        assert!(text.contains("•••"));
        assert!(!text.contains("abc"));
        assert!(text.contains("Password must be at least 6 characters"));
    }

    #[test]
    fn test_cursor_stays_inside_field_for_very_long_input() {
        let mut form = LoginForm::new();
        for _ in 0..usize::from(u16::MAX) + 5 {
            press(&mut form, KeyCode::Char('a'));
        }

        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_login(f, area, &form, false, 0);
            })
            .unwrap();

        // The 56-column form is centred in 80 columns: border at 12..68.
        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!(cursor.x, 66);
    }

    #[test]
    fn test_loading_shows_spinner() {
        let text = screen_text(&LoginForm::new(), true);
        assert!(text.contains("Signing in..."));
    }
}
