//! Session setup and initialization

use crate::api::ApiClient;
use crate::controller::DashboardController;
use crate::environment::Environment;
use crate::events::Event;
use crate::runtime::start_dashboard_workers;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Event receiver for worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop all workers
    pub shutdown_sender: broadcast::Sender<()>,
    /// Controller owning the dashboard state
    pub controller: DashboardController,
    /// The environment the session is connected to
    pub environment: Environment,
}

/// Sets up a dashboard session
///
/// This function handles the common setup required for both TUI and headless
/// modes:
/// 1. Creates the backend client and the data controller
/// 2. Performs the initial all-or-nothing load
/// 3. Starts the background workers
/// 4. Returns session data for mode-specific handling
///
/// # Errors
/// Returns an error when any part of the initial load fails; the session must
/// not start on partial data.
pub async fn setup_session(
    user_id: String,
    env: Environment,
) -> Result<SessionData, Box<dyn Error>> {
    let api_client = ApiClient::new(env.clone());
    let controller = DashboardController::new(Arc::new(api_client), user_id);

    // Initial load gate: all four slices or nothing.
    controller
        .load_initial()
        .await
        .map_err(|e| format!("Failed to load dashboard data: {}", e))?;

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let (event_receiver, join_handles) =
        start_dashboard_workers(controller.clone(), shutdown_sender.subscribe());

    Ok(SessionData {
        event_receiver,
        join_handles,
        shutdown_sender,
        controller,
        environment: env,
    })
}
