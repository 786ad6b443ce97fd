//! Event System
//!
//! Activity events emitted by the login flow and shown in the activity panel
//! (TUI) or on stdout (headless).

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;
use tokio::sync::mpsc;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// The login form and its validator.
    Form,
    /// The session request view-model.
    Session,
    /// The navigation collaborator.
    Navigator,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Waiting,
    Cancelled,
    Navigation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn form_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Form, msg, event_type, log_level)
    }

    pub fn session_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Session, msg, event_type, log_level)
    }

    pub fn navigation(msg: String) -> Self {
        Self::new(
            Source::Navigator,
            msg,
            EventType::Navigation,
            LogLevel::Info,
        )
    }

    pub fn should_display(&self) -> bool {
        // Outcomes are always worth showing
        if matches!(self.event_type, EventType::Success | EventType::Error) {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

/// Non-blocking handle for emitting events.
///
/// Events are dropped when the queue is full or the receiver is gone; the
/// activity log is advisory and must never stall a login request.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    pub fn send_event(&self, event: Event) {
        let _ = self.sender.try_send(event);
    }

    pub fn send_session_event(&self, message: String, event_type: EventType, log_level: LogLevel) {
        self.send_event(Event::session_with_level(message, event_type, log_level));
    }

    pub fn send_form_event(&self, message: String, event_type: EventType, log_level: LogLevel) {
        self.send_event(Event::form_with_level(message, event_type, log_level));
    }
}
