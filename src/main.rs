mod api;
mod cli_messages;
mod config;
mod consts;
mod controller;
mod donations;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod models;
mod runtime;
mod session;
mod transactions;
mod ui;
mod version;
mod workers;

use crate::api::ApiClient;
use crate::config::{Config, get_config_path};
use crate::controller::DashboardController;
use crate::environment::Environment;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::Path;
use std::sync::Arc;

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
    /// Start the live dashboard
    Start {
        /// User ID; falls back to the stored configuration.
        #[arg(long, value_name = "USER_ID")]
        user_id: Option<String>,

        /// Log events to the console instead of running the TUI.
        #[arg(long)]
        headless: bool,

        /// Disable the dashboard background color.
        #[arg(long)]
        no_background: bool,
    },
    /// Store the user ID used by subsequent commands
    Login {
        /// User ID assigned by the backend.
        #[arg(long, value_name = "USER_ID")]
        user_id: String,
    },
    /// Clear the user configuration and logout
    Logout,
    /// Deposit funds into the account
    Deposit {
        /// Amount to deposit.
        #[arg(long, value_name = "AMOUNT")]
        amount: String,

        /// User ID; falls back to the stored configuration.
        #[arg(long, value_name = "USER_ID")]
        user_id: Option<String>,
    },
    /// Purchase fund shares
    Purchase {
        /// Identifier of the fund to buy into.
        #[arg(long, value_name = "FUND_ID")]
        fund_id: String,

        /// Amount to invest.
        #[arg(long, value_name = "AMOUNT")]
        amount: String,

        /// User ID; falls back to the stored configuration.
        #[arg(long, value_name = "USER_ID")]
        user_id: Option<String>,
    },
    /// List public-good projects and your contributions
    Donations {
        /// User ID; falls back to the stored configuration.
        #[arg(long, value_name = "USER_ID")]
        user_id: Option<String>,
    },
    /// Contribute to a public-good project
    Contribute {
        /// Identifier of the project to contribute to.
        #[arg(long, value_name = "PROJECT_ID")]
        project_id: String,

        /// Virtual amount to contribute.
        #[arg(long, value_name = "AMOUNT")]
        amount: String,

        /// User ID; falls back to the stored configuration.
        #[arg(long, value_name = "USER_ID")]
        user_id: Option<String>,
    },
}

/// Resolve the user id from the flag or the stored configuration.
fn resolve_user_id(flag: Option<String>, config_path: &Path) -> Result<String, Box<dyn Error>> {
    if let Some(user_id) = flag {
        return Ok(user_id);
    }
    if config_path.exists() {
        match Config::load_from_file(config_path) {
            Ok(config) if !config.user_id.is_empty() => return Ok(config.user_id),
            Ok(_) => {}
            Err(e) => {
                crate::print_cmd_warn!("Could not read stored configuration.", "{}", e);
            }
        }
    }
    Err(Box::from(
        "No user configured. Run `fundwatch login --user-id <ID>` or pass --user-id.",
    ))
}

/// Build a controller for a one-shot command (no initial load, no workers).
fn one_shot_controller(
    user_id: Option<String>,
    config_path: &Path,
    environment: Environment,
) -> Result<DashboardController, Box<dyn Error>> {
    let user_id = resolve_user_id(user_id, config_path)?;
    let api_client = ApiClient::new(environment);
    Ok(DashboardController::new(Arc::new(api_client), user_id))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment = Environment::from_env();
    let config_path = get_config_path()?;
    let args = Args::parse();

    match args.command {
        Command::Start {
            user_id,
            headless,
            no_background,
        } => {
            let user_id = resolve_user_id(user_id, &config_path)?;
            match setup_session(user_id, environment).await {
                Ok(session) => {
                    if headless {
                        run_headless_mode(session).await
                    } else {
                        run_tui_mode(session, !no_background).await
                    }
                }
                Err(e) => {
                    // Initial-load failures are fatal to the session; there is
                    // nothing to render on partial data.
                    crate::print_cmd_error!("Failed to start the dashboard.", &e.to_string());
                    Err(e)
                }
            }
        }
        Command::Login { user_id } => {
            if user_id.trim().is_empty() {
                return Err(Box::from("User ID must not be empty."));
            }
            let config = Config::new(user_id.trim().to_string());
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            crate::print_cmd_success!("Logged in.", "User ID: {}", config.user_id);
            Ok(())
        }
        Command::Logout => {
            println!("Logging out and clearing user configuration file...");
            Config::clear(&config_path).map_err(Into::into)
        }
        Command::Deposit { amount, user_id } => {
            let controller = one_shot_controller(user_id, &config_path, environment)?;
            transactions::run_deposit(&controller, &amount).await
        }
        Command::Purchase {
            fund_id,
            amount,
            user_id,
        } => {
            let controller = one_shot_controller(user_id, &config_path, environment)?;
            transactions::run_purchase(&controller, &fund_id, &amount).await
        }
        Command::Donations { user_id } => {
            let controller = one_shot_controller(user_id, &config_path, environment)?;
            donations::run_donations(&controller).await
        }
        Command::Contribute {
            project_id,
            amount,
            user_id,
        } => {
            let controller = one_shot_controller(user_id, &config_path, environment)?;
            donations::run_contribute(&controller, &project_id, &amount).await
        }
    }
}
