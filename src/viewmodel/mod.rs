//! Login view-model
//!
//! Owns the [`SessionRequestState`] and runs login requests as cancellable
//! tokio tasks. A new request supersedes the one in flight: the previous
//! task is cancelled and its completion, if it still arrives, is discarded.

pub mod state;

pub use state::{RequestId, SessionAction, SessionRequestState};

use crate::auth::Authenticator;
use crate::auth::error::AuthError;
use crate::events::{EventSender, EventType};
use crate::logging::LogLevel;
use crate::validation::Credentials;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// How a single `login` call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    Rejected,
    Faulted(String),
    /// Cancelled explicitly or superseded by a newer request.
    Cancelled,
}

#[derive(Debug)]
struct InFlight {
    id: RequestId,
    cancel: CancellationToken,
}

pub struct LoginViewModel {
    authenticator: Arc<dyn Authenticator>,
    state: Arc<watch::Sender<SessionRequestState>>,
    in_flight: Arc<Mutex<Option<InFlight>>>,
    next_request: AtomicU64,
    events: EventSender,
}

impl LoginViewModel {
    pub fn new(authenticator: Arc<dyn Authenticator>, events: EventSender) -> Self {
        let (state, _) = watch::channel(SessionRequestState::new());
        Self {
            authenticator,
            state: Arc::new(state),
            in_flight: Arc::new(Mutex::new(None)),
            next_request: AtomicU64::new(0),
            events,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionRequestState {
        self.state.borrow().clone()
    }

    #[cfg(test)]
    fn in_flight_id(&self) -> Option<RequestId> {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|in_flight| in_flight.id)
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<SessionRequestState> {
        self.state.subscribe()
    }

    /// Starts a login request and returns the handle of its task.
    ///
    /// `on_success` runs once if, and only if, this request is accepted while
    /// still being the current one. Must be called within a tokio runtime.
    pub fn login<F>(&self, credentials: Credentials, on_success: F) -> JoinHandle<LoginOutcome>
    where
        F: FnOnce() + Send + 'static,
    {
        let id = RequestId(self.next_request.fetch_add(1, Ordering::Relaxed) + 1);
        let cancel = CancellationToken::new();

        {
            let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(previous) = in_flight.replace(InFlight {
                id,
                cancel: cancel.clone(),
            }) {
                log::debug!("Request {} superseded by {}", previous.id, id);
                previous.cancel.cancel();
            }
            // Under the lock so Started events are ordered like the ids.
            dispatch(&self.state, SessionAction::Started(id));
        }

        log::info!("Login request {} started for {}", id, credentials.username);
        self.events.send_session_event(
            format!("Signing in as {}...", credentials.username),
            EventType::Waiting,
            LogLevel::Info,
        );

        let authenticator = Arc::clone(&self.authenticator);
        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        let slot = Arc::clone(&self.in_flight);

        tokio::spawn(async move {
            let call = AssertUnwindSafe(authenticator.verify(&credentials)).catch_unwind();
            let result = tokio::select! {
                _ = cancel.cancelled() => {
                    log::debug!("Request {} cancelled before completion", id);
                    return LoginOutcome::Cancelled;
                }
                result = call => result.unwrap_or_else(|panic| Err(AuthError::from_panic(panic))),
            };

            let (action, outcome) = match result {
                Ok(true) => (SessionAction::Accepted(id), LoginOutcome::Accepted),
                Ok(false) => (SessionAction::Rejected(id), LoginOutcome::Rejected),
                Err(e) => (
                    SessionAction::Faulted(id, e.to_string()),
                    LoginOutcome::Faulted(e.to_string()),
                ),
            };

            if !dispatch(&state, action) {
                log::debug!("Discarding stale completion of request {}", id);
                return LoginOutcome::Cancelled;
            }
            release_slot(&slot, id);

            match &outcome {
                LoginOutcome::Accepted => {
                    log::info!("Login request {} accepted", id);
                    events.send_session_event(
                        format!("Signed in as {}", credentials.username),
                        EventType::Success,
                        LogLevel::Info,
                    );
                    on_success();
                }
                LoginOutcome::Rejected => {
                    log::warn!("Login request {} rejected", id);
                    events.send_session_event(
                        crate::consts::cli_consts::REJECTED_MESSAGE.to_string(),
                        EventType::Error,
                        LogLevel::Warn,
                    );
                }
                LoginOutcome::Faulted(description) => {
                    log::error!("Login request {} failed: {}", id, description);
                    events.send_session_event(
                        format!("Error: {}", description),
                        EventType::Error,
                        LogLevel::Error,
                    );
                }
                LoginOutcome::Cancelled => {}
            }
            outcome
        })
    }

    /// Cancels the request in flight, if any. Its continuation never runs.
    pub fn cancel(&self) {
        let taken = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(in_flight) = taken {
            in_flight.cancel.cancel();
            if dispatch(&self.state, SessionAction::Cancelled(in_flight.id)) {
                log::info!("Login request {} cancelled", in_flight.id);
                self.events.send_session_event(
                    "Sign-in cancelled".to_string(),
                    EventType::Cancelled,
                    LogLevel::Info,
                );
            }
        }
    }

    /// Drops the last error message. Never touches `is_loading`.
    pub fn clear_error(&self) {
        dispatch(&self.state, SessionAction::ErrorCleared);
    }
}

impl std::fmt::Debug for LoginViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginViewModel")
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

/// Empties the in-flight slot if it still holds request `id`.
fn release_slot(slot: &Mutex<Option<InFlight>>, id: RequestId) {
    let mut in_flight = slot.lock().unwrap_or_else(PoisonError::into_inner);
    if in_flight.as_ref().is_some_and(|current| current.id == id) {
        in_flight.take();
    }
}

/// Applies `action` atomically; returns whether the state changed.
fn dispatch(state: &watch::Sender<SessionRequestState>, action: SessionAction) -> bool {
    state.send_if_modified(|current| {
        let next = current.reduce(&action);
        if next == *current {
            false
        } else {
            *current = next;
            true
        }
    })
}
