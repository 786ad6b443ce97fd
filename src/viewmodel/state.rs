//! Session request state and its reducer
//!
//! The state is a plain value; every transition goes through
//! [`SessionRequestState::reduce`].

use crate::consts::cli_consts::REJECTED_MESSAGE;
use std::fmt::{Display, Formatter};

/// Identifies one `login` call. Ids increase monotonically per view-model.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Transitions of the session request state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// A request was issued; it supersedes any request still in flight.
    Started(RequestId),
    /// The authenticator accepted the credentials.
    Accepted(RequestId),
    /// The authenticator rejected the credentials.
    Rejected(RequestId),
    /// The authentication call failed with the given description.
    Faulted(RequestId, String),
    /// The request was cancelled before it completed.
    Cancelled(RequestId),
    /// The last error was displayed or dismissed.
    ErrorCleared,
}

/// Observable state of the login request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionRequestState {
    /// True only while the current request is in flight.
    pub is_loading: bool,
    /// Message of the last rejected or faulted request, until cleared.
    pub error: Option<String>,
    in_flight: Option<RequestId>,
}

impl SessionRequestState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The request currently in flight, if any.
    #[cfg(test)]
    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        self.in_flight == Some(id)
    }

    /// Applies `action` and returns the next state.
    ///
    /// Completion actions for a request that is no longer in flight leave the
    /// state untouched.
    pub fn reduce(&self, action: &SessionAction) -> Self {
        match action {
            SessionAction::Started(id) => Self {
                is_loading: true,
                error: None,
                in_flight: Some(*id),
            },
            SessionAction::Accepted(id) if self.is_current(*id) => self.settle(None),
            SessionAction::Rejected(id) if self.is_current(*id) => {
                self.settle(Some(REJECTED_MESSAGE.to_string()))
            }
            SessionAction::Faulted(id, description) if self.is_current(*id) => {
                self.settle(Some(format!("Error: {}", description)))
            }
            SessionAction::Cancelled(id) if self.is_current(*id) => Self {
                is_loading: false,
                error: self.error.clone(),
                in_flight: None,
            },
            SessionAction::ErrorCleared => Self {
                error: None,
                ..self.clone()
            },
            // Stale completion
            _ => self.clone(),
        }
    }

    fn settle(&self, error: Option<String>) -> Self {
        Self {
            is_loading: false,
            error,
            in_flight: None,
        }
    }
}
