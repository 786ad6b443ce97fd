//! Session setup and initialization

use crate::auth::{Authenticator, SimulatedAuthenticator};
use crate::config::Config;
use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, ROUTE_QUEUE_SIZE};
use crate::events::{Event, EventSender};
use crate::navigation::{Navigator, Route};
use crate::viewmodel::LoginViewModel;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// View-model that runs login requests
    pub view_model: Arc<LoginViewModel>,
    /// Navigation collaborator handed to login continuations
    pub navigator: Navigator,
    /// Sender for events raised outside the view-model (form, app)
    pub events: EventSender,
    /// Activity events from the view-model and navigator
    pub event_receiver: mpsc::Receiver<Event>,
    /// Requested navigation targets
    pub route_receiver: mpsc::Receiver<Route>,
}

/// Wires a session around the simulated authenticator described by `config`.
pub fn setup_session(config: &Config) -> SessionData {
    log::debug!(
        "Setting up session with a {} ms simulated delay",
        config.simulated_delay_ms
    );
    setup_session_with(Arc::new(SimulatedAuthenticator::new(
        config.simulated_delay(),
    )))
}

/// Wires a session around an arbitrary authenticator.
pub fn setup_session_with(authenticator: Arc<dyn Authenticator>) -> SessionData {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (route_sender, route_receiver) = mpsc::channel::<Route>(ROUTE_QUEUE_SIZE);
    let events = EventSender::new(event_sender);

    SessionData {
        view_model: Arc::new(LoginViewModel::new(authenticator, events.clone())),
        navigator: Navigator::new(route_sender, events.clone()),
        events,
        event_receiver,
        route_receiver,
    }
}
