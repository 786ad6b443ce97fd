mod auth;
mod cli_messages;
mod config;
mod consts;
mod events;
mod logging;
mod navigation;
mod session;
mod ui;
mod validation;
mod viewmodel;

use crate::config::{Config, get_config_path};
use crate::session::{run_headless_login, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the login screen
    Start {
        /// Simulated authentication delay in milliseconds
        #[arg(long, value_name = "MILLIS")]
        delay_ms: Option<u64>,

        /// Disable background colors
        #[arg(long)]
        no_background: bool,
    },
    /// Sign in without the TUI
    Login {
        /// Username or email
        #[arg(long, value_name = "USERNAME")]
        username: String,

        /// Password
        #[arg(long, value_name = "PASSWORD")]
        password: String,

        /// Simulated authentication delay in milliseconds
        #[arg(long, value_name = "MILLIS")]
        delay_ms: Option<u64>,
    },
    /// Save defaults for the login screen.
    Configure {
        /// Simulated authentication delay in milliseconds
        #[arg(long, value_name = "MILLIS")]
        delay_ms: Option<u64>,

        /// Paint a dark background behind the TUI
        #[arg(long, value_name = "BOOL")]
        background: Option<bool>,
    },
    /// Delete the saved configuration file.
    ResetConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    if !matches!(args.command, Command::Start { .. }) {
        logging::init_logger();
    }

    match args.command {
        Command::Start {
            delay_ms,
            no_background,
        } => {
            let mut config = load_config(&config_path)?;
            if let Some(delay_ms) = delay_ms {
                config.simulated_delay_ms = delay_ms;
            }
            let with_background = config.with_background_color && !no_background;
            run_tui_mode(setup_session(&config), with_background).await
        }
        Command::Login {
            username,
            password,
            delay_ms,
        } => {
            let mut config = load_config(&config_path)?;
            if let Some(delay_ms) = delay_ms {
                config.simulated_delay_ms = delay_ms;
            }
            run_headless_login(setup_session(&config), &username, &password).await
        }
        Command::Configure {
            delay_ms,
            background,
        } => {
            let mut config = load_config(&config_path)?;
            if let Some(delay_ms) = delay_ms {
                config.simulated_delay_ms = delay_ms;
            }
            if let Some(background) = background {
                config.with_background_color = background;
            }
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            crate::print_cmd_success!(
                "Configuration saved",
                "delay {} ms, background {}",
                config.simulated_delay_ms,
                config.with_background_color
            );
            Ok(())
        }
        Command::ResetConfig => {
            crate::print_cmd_info!("Resetting configuration", "{}", config_path.display());
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

fn load_config(path: &std::path::Path) -> Result<Config, Box<dyn Error>> {
    Config::load_or_default(path).map_err(|e| {
        crate::print_cmd_error!(
            "Failed to load config",
            format!("{}: {}", path.display(), e).as_str()
        );
        e.into()
    })
}
