//! Navigation targets reachable from the login screen.

use crate::events::{Event, EventSender};
use tokio::sync::mpsc;

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum Route {
    #[strum(to_string = "Home")]
    Home,
    #[strum(to_string = "Forgot Password")]
    ForgotPassword,
    #[strum(to_string = "Sign Up")]
    SignUp,
}

impl Route {
    /// Diagnostic line announced when the route is requested.
    pub fn announcement(&self) -> &'static str {
        match self {
            Route::Home => "Navigate to home screen",
            Route::ForgotPassword => "Navigate to forgot password screen",
            Route::SignUp => "Navigate to sign up screen",
        }
    }
}

/// Forwards route requests to whoever owns the screens.
#[derive(Debug, Clone)]
pub struct Navigator {
    sender: mpsc::Sender<Route>,
    events: EventSender,
}

impl Navigator {
    pub fn new(sender: mpsc::Sender<Route>, events: EventSender) -> Self {
        Self { sender, events }
    }

    pub fn navigate(&self, route: Route) {
        log::info!("{}", route.announcement());
        self.events
            .send_event(Event::navigation(route.announcement().to_string()));
        if self.sender.try_send(route).is_err() {
            log::warn!("Dropped navigation to {}: route queue unavailable", route);
        }
    }
}
