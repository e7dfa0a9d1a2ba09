//! Runtime for coordinating dashboard workers

use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::controller::DashboardController;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::workers::core::EventSender;
use crate::workers::refresher::market_refresh_task;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Start the background workers for a dashboard session: the periodic market
/// refresher and the one-shot donations loader. Returns the activity event
/// stream and the join handles to await on teardown.
pub fn start_dashboard_workers(
    controller: DashboardController,
    shutdown: broadcast::Receiver<()>,
) -> (mpsc::Receiver<Event>, Vec<JoinHandle<()>>) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let event_sender = EventSender::new(event_sender);
    let mut join_handles = Vec::new();

    // Periodic market refresh, cancelled via the shutdown channel.
    let refresher_handle = {
        let controller = controller.clone();
        let event_sender = event_sender.clone();
        tokio::spawn(async move {
            market_refresh_task(controller, event_sender, shutdown).await;
        })
    };
    join_handles.push(refresher_handle);

    // Donation state loads once, off the critical path; the dashboard is not
    // gated on it.
    let donations_handle = tokio::spawn(async move {
        match controller.load_donations().await {
            Ok(count) => {
                event_sender
                    .send_donation_event(
                        format!("Loaded {} public-good projects", count),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
            }
            Err(e) => {
                event_sender
                    .send_donation_event(
                        format!("Failed to load donation data: {}", e),
                        EventType::Error,
                        LogLevel::Warn,
                    )
                    .await;
            }
        }
    });
    join_handles.push(donations_handle);

    (event_receiver, join_handles)
}
