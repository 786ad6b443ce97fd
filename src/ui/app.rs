//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, SPLASH_DURATION_MS, UI_POLL_INTERVAL_MS};
use crate::events::{Event as LoginEvent, EventSender, EventType};
use crate::logging::LogLevel;
use crate::navigation::{Navigator, Route};
use crate::session::SessionData;
use crate::ui::activity::{render_activity_panel, render_footer};
use crate::ui::destination::render_destination;
use crate::ui::login::{FormAction, LoginForm, render_login};
use crate::ui::splash::render_splash;
use crate::validation::Credentials;
use crate::viewmodel::{LoginViewModel, SessionRequestState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;
use ratatui::{Frame, Terminal, backend::Backend};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, watch};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Login form.
    Login(Box<LoginForm>),
    /// Placeholder for a screen reached from the login form.
    Destination(Route),
}

/// Application state
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Session request view-model driving the login.
    view_model: Arc<LoginViewModel>,

    /// Observed view-model state.
    session_state: watch::Receiver<SessionRequestState>,

    navigator: Navigator,

    events: EventSender,

    /// Receives activity events from the view-model and navigator.
    event_receiver: mpsc::Receiver<LoginEvent>,

    /// Receives navigation requests.
    route_receiver: mpsc::Receiver<Route>,

    /// Recent events shown in the activity panel.
    activity_logs: VecDeque<LoginEvent>,

    /// Animation tick counter
    tick: usize,

    /// Whether to paint the background
    with_background_color: bool,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(session: SessionData, ui_config: UIConfig) -> Self {
        Self {
            current_screen: Screen::Splash,
            session_state: session.view_model.subscribe(),
            view_model: session.view_model,
            navigator: session.navigator,
            events: session.events,
            event_receiver: session.event_receiver,
            route_receiver: session.route_receiver,
            activity_logs: VecDeque::new(),
            tick: 0,
            with_background_color: ui_config.with_background_color,
        }
    }

    #[cfg(test)]
    pub fn current_screen(&self) -> &Screen {
        &self.current_screen
    }

    #[cfg(test)]
    pub fn activity_logs(&self) -> &VecDeque<LoginEvent> {
        &self.activity_logs
    }

    fn is_loading(&self) -> bool {
        self.session_state.borrow().is_loading
    }

    /// Shows a fresh login form.
    pub fn show_login(&mut self) {
        self.current_screen = Screen::Login(Box::new(LoginForm::new()));
    }

    /// Pulls in everything that happened since the last frame: activity
    /// events, navigation requests and session errors.
    pub fn sync(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
                self.activity_logs.pop_front();
            }
            self.activity_logs.push_back(event);
        }

        while let Ok(route) = self.route_receiver.try_recv() {
            self.current_screen = Screen::Destination(route);
        }

        // The guard must be released before clear_error writes to the channel.
        let error = self.session_state.borrow_and_update().error.clone();
        if let Some(message) = error {
            if let Screen::Login(form) = &mut self.current_screen {
                form.show_error(message);
            }
            self.view_model.clear_error();
        }
    }

    /// Handles a key press. Returns `false` when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return false;
        }

        let is_loading = self.is_loading();
        match &mut self.current_screen {
            Screen::Splash => {
                if key.code == KeyCode::Esc {
                    return false;
                }
                self.show_login();
            }
            Screen::Login(form) => {
                if key.code == KeyCode::Esc {
                    if is_loading {
                        self.view_model.cancel();
                        return true;
                    }
                    return false;
                }
                match form.handle_key(key, is_loading) {
                    Some(FormAction::Submit(credentials)) => self.start_login(credentials),
                    Some(FormAction::Invalid(e)) => self.events.send_form_event(
                        e.to_string(),
                        EventType::Error,
                        LogLevel::Warn,
                    ),
                    Some(FormAction::Navigate(route)) => self.navigator.navigate(route),
                    None => {}
                }
            }
            Screen::Destination(_) => {
                if key.code == KeyCode::Esc {
                    self.show_login();
                }
            }
        }
        true
    }

    fn start_login(&mut self, credentials: Credentials) {
        let navigator = self.navigator.clone();
        // Detached: completion is observed through the session state.
        let _ = self
            .view_model
            .login(credentials, move || navigator.navigate(Route::Home));
    }

    /// Stops any request still in flight.
    pub fn shutdown(&self) {
        self.view_model.cancel();
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);

    loop {
        app.sync();

        if matches!(app.current_screen, Screen::Splash) && splash_start.elapsed() >= splash_duration
        {
            app.show_login();
        }

        app.tick = app.tick.wrapping_add(1);
        terminal.draw(|f| render(f, &app))?;

        if event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if !app.handle_key(key) {
                    app.shutdown();
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    if app.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            area,
        );
    }

    if let Screen::Splash = app.current_screen {
        render_splash(f, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(7),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(area);

    match &app.current_screen {
        Screen::Splash => {}
        Screen::Login(form) => render_login(f, chunks[0], form, app.is_loading(), app.tick),
        Screen::Destination(route) => render_destination(f, chunks[0], *route),
    }
    render_activity_panel(f, chunks[1], &app.activity_logs);
    render_footer(f, chunks[2]);
}
