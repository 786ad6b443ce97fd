//! Headless mode execution

use super::SessionData;
use crate::events::Source;
use crate::navigation::Route;
use crate::validation::validate;
use crate::viewmodel::LoginOutcome;
use crate::{print_cmd_error, print_cmd_info, print_cmd_success, print_cmd_warn};
use std::error::Error;
use std::sync::Arc;

/// Runs a single login without the TUI
///
/// This function handles:
/// 1. Field validation
/// 2. The login request, with Ctrl+C cancelling it
/// 3. Console event logging
///
/// # Returns
/// * `Ok(())` - Credentials were accepted
/// * `Err` - Validation failed, or the request was rejected, faulted or cancelled
pub async fn run_headless_login(
    mut session: SessionData,
    username: &str,
    password: &str,
) -> Result<(), Box<dyn Error>> {
    let credentials = match validate(username, password) {
        Ok(credentials) => credentials,
        Err(e) => {
            print_cmd_error!("Invalid input", e.to_string().as_str());
            return Err(e.into());
        }
    };

    print_cmd_info!("Signing in", "as {}", credentials.username);

    let navigator = session.navigator.clone();
    let view_model = Arc::clone(&session.view_model);
    let mut handle = view_model.login(credentials, move || navigator.navigate(Route::Home));

    let outcome = loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                if event.source != Source::Navigator && event.should_display() {
                    println!("{}", event);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                print_cmd_warn!("Interrupted", "cancelling sign-in");
                view_model.cancel();
            }
            joined = &mut handle => break joined?,
        }
    };

    while let Ok(event) = session.event_receiver.try_recv() {
        if event.source != Source::Navigator && event.should_display() {
            println!("{}", event);
        }
    }
    while let Ok(route) = session.route_receiver.try_recv() {
        print_cmd_info!("Navigation", "{}", route.announcement());
    }

    match outcome {
        LoginOutcome::Accepted => {
            print_cmd_success!("Signed in", "");
            Ok(())
        }
        LoginOutcome::Cancelled => Err("Sign-in cancelled".into()),
        LoginOutcome::Rejected | LoginOutcome::Faulted(_) => {
            // Shown once, then cleared like in the TUI.
            let message = view_model
                .state()
                .error
                .unwrap_or_else(|| "Sign-in failed".to_string());
            view_model.clear_error();
            print_cmd_error!("Login failed", message.as_str());
            Err(message.into())
        }
    }
}
