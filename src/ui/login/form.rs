//! Login form state
//!
//! Holds the transient field text, focus and the inline error message, and
//! turns key presses into [`FormAction`]s.

use crate::navigation::Route;
use crate::validation::{Credentials, ValidationError, validate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Focusable elements of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Username,
    Password,
    ForgotPassword,
    Submit,
    SignUp,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Username,
        Focus::Password,
        Focus::ForgotPassword,
        Focus::Submit,
        Focus::SignUp,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_text_field(self) -> bool {
        matches!(self, Focus::Username | Focus::Password)
    }
}

/// What the app should do in response to a key press on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Input passed validation; start a login request.
    Submit(Credentials),
    /// Input failed validation; the message is already on the form.
    Invalid(ValidationError),
    Navigate(Route),
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    username: String,
    password: String,
    show_password: bool,
    error_message: Option<String>,
    focus: Focus,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    #[cfg(test)]
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[cfg(test)]
    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Password as it should appear on screen.
    pub fn displayed_password(&self) -> String {
        if self.show_password {
            self.password.clone()
        } else {
            "•".repeat(self.password.chars().count())
        }
    }

    /// Whether the Login button is enabled.
    pub fn can_submit(&self, is_loading: bool) -> bool {
        !is_loading && !self.username.trim().is_empty() && !self.password.trim().is_empty()
    }

    /// Shows `message` in the error banner until the next edit.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn handle_key(&mut self, key: KeyEvent, is_loading: bool) -> Option<FormAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('r') {
                self.show_password = !self.show_password;
            }
            return None;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.previous();
                None
            }
            KeyCode::Enter => self.activate(is_loading),
            KeyCode::Backspace if self.focus.is_text_field() => {
                self.edit(|text| {
                    text.pop();
                });
                None
            }
            KeyCode::Char(c) if self.focus.is_text_field() => {
                self.edit(|text| text.push(c));
                None
            }
            _ => None,
        }
    }

    fn activate(&mut self, is_loading: bool) -> Option<FormAction> {
        match self.focus {
            Focus::Username => {
                self.focus = Focus::Password;
                None
            }
            Focus::Password => Some(self.submit()),
            Focus::Submit if self.can_submit(is_loading) => Some(self.submit()),
            Focus::Submit => None,
            Focus::ForgotPassword => Some(FormAction::Navigate(Route::ForgotPassword)),
            Focus::SignUp => Some(FormAction::Navigate(Route::SignUp)),
        }
    }

    fn submit(&mut self) -> FormAction {
        match validate(&self.username, &self.password) {
            Ok(credentials) => FormAction::Submit(credentials),
            Err(e) => {
                self.error_message = Some(e.to_string());
                FormAction::Invalid(e)
            }
        }
    }

    fn edit(&mut self, change: impl FnOnce(&mut String)) {
        let field = match self.focus {
            Focus::Username => &mut self.username,
            Focus::Password => &mut self.password,
            _ => return,
        };
        change(field);
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(form: &mut LoginForm, text: &str) {
        for c in text.chars() {
            assert_eq!(form.handle_key(key(KeyCode::Char(c)), false), None);
        }
    }

    fn filled(username: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::new();
        type_text(&mut form, username);
        form.handle_key(key(KeyCode::Enter), false);
        type_text(&mut form, password);
        form
    }

    #[test]
    fn test_focus_ring_wraps_both_ways() {
        assert_eq!(Focus::Username.next(), Focus::Password);
        assert_eq!(Focus::SignUp.next(), Focus::Username);
        assert_eq!(Focus::Username.previous(), Focus::SignUp);
        assert_eq!(Focus::Submit.previous(), Focus::ForgotPassword);
    }

    #[test]
    fn test_typing_fills_the_focused_field() {
        let form = filled("alice", "secret1");
        assert_eq!(form.username(), "alice");
        assert_eq!(form.password(), "secret1");
        assert_eq!(form.focus(), Focus::Password);
    }

    #[test]
    fn test_enter_on_password_submits_valid_input() {
        let mut form = filled("alice", "secret1");
        let action = form.handle_key(key(KeyCode::Enter), false);
        assert_eq!(
            action,
            Some(FormAction::Submit(Credentials::new("alice", "secret1")))
        );
        assert_eq!(form.error_message(), None);
    }

    #[test]
    fn test_invalid_submit_shows_first_error() {
        let mut form = filled("alice", "abc");
        let action = form.handle_key(key(KeyCode::Enter), false);
        assert_eq!(
            action,
            Some(FormAction::Invalid(ValidationError::PasswordTooShort))
        );
        assert_eq!(
            form.error_message(),
            Some("Password must be at least 6 characters")
        );

        let mut form = LoginForm::new();
        form.handle_key(key(KeyCode::Tab), false);
        form.handle_key(key(KeyCode::Enter), false);
        assert_eq!(form.error_message(), Some("Username cannot be empty"));
    }

    #[test]
    fn test_edit_clears_error() {
        let mut form = filled("alice", "abc");
        form.handle_key(key(KeyCode::Enter), false);
        assert!(form.error_message().is_some());

        form.handle_key(key(KeyCode::Backspace), false);
        assert_eq!(form.error_message(), None);
        assert_eq!(form.password(), "ab");
    }

    #[test]
    fn test_external_error_cleared_by_edit() {
        let mut form = filled("alice", "secret1");
        form.show_error("Invalid username or password");
        assert_eq!(form.error_message(), Some("Invalid username or password"));

        type_text(&mut form, "2");
        assert_eq!(form.error_message(), None);
    }

    #[test]
    fn test_submit_button_respects_enabled_state() {
        let mut form = filled("alice", "secret1");
        form.handle_key(key(KeyCode::Tab), false);
        form.handle_key(key(KeyCode::Tab), false);
        assert_eq!(form.focus(), Focus::Submit);

        assert!(!form.can_submit(true));
        assert_eq!(form.handle_key(key(KeyCode::Enter), true), None);

        assert!(form.can_submit(false));
        assert!(matches!(
            form.handle_key(key(KeyCode::Enter), false),
            Some(FormAction::Submit(_))
        ));

        let mut empty = LoginForm::new();
        assert!(!empty.can_submit(false));
        empty.handle_key(key(KeyCode::BackTab), false);
        empty.handle_key(key(KeyCode::BackTab), false);
        assert_eq!(empty.focus(), Focus::Submit);
        assert_eq!(empty.handle_key(key(KeyCode::Enter), false), None);
        assert_eq!(empty.error_message(), None);
    }

    #[test]
    fn test_link_actions_navigate() {
        let mut form = LoginForm::new();
        form.handle_key(key(KeyCode::Down), false);
        form.handle_key(key(KeyCode::Down), false);
        assert_eq!(
            form.handle_key(key(KeyCode::Enter), false),
            Some(FormAction::Navigate(Route::ForgotPassword))
        );

        form.handle_key(key(KeyCode::Up), false);
        form.handle_key(key(KeyCode::Up), false);
        form.handle_key(key(KeyCode::Up), false);
        assert_eq!(form.focus(), Focus::SignUp);
        assert_eq!(
            form.handle_key(key(KeyCode::Enter), false),
            Some(FormAction::Navigate(Route::SignUp))
        );
    }

    #[test]
    fn test_characters_ignored_on_buttons() {
        let mut form = LoginForm::new();
        form.handle_key(key(KeyCode::BackTab), false);
        assert_eq!(form.focus(), Focus::SignUp);
        form.handle_key(key(KeyCode::Char('x')), false);
        assert_eq!(form.username(), "");
        assert_eq!(form.password(), "");
    }

    #[test]
    fn test_ctrl_r_toggles_password_visibility() {
        let mut form = filled("alice", "secret");
        assert_eq!(form.displayed_password(), "••••••");

        let toggle = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        form.handle_key(toggle, false);
        assert!(form.show_password());
        assert_eq!(form.displayed_password(), "secret");
        assert_eq!(form.password(), "secret");
    }
}
