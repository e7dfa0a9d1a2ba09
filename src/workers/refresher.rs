//! Periodic market data refresh
//!
//! A cancellable worker that re-fetches the market snapshot and trend series
//! on a fixed interval. Failures are reported as events and swallowed; the
//! loop only ends on shutdown.

use super::core::EventSender;
use crate::consts::cli_consts::market;
use crate::controller::DashboardController;
use crate::error_classifier::ErrorClassifier;
use crate::events::EventType;
use crate::logging::LogLevel;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::{MissedTickBehavior, interval};

/// Background task that refreshes the market slices every five seconds.
pub async fn market_refresh_task(
    controller: DashboardController,
    event_sender: EventSender,
    shutdown: broadcast::Receiver<()>,
) {
    market_refresh_task_with_interval(controller, event_sender, shutdown, market::refresh_interval())
        .await;
}

/// Background task that refreshes the market slices with a configurable interval
pub async fn market_refresh_task_with_interval(
    controller: DashboardController,
    event_sender: EventSender,
    mut shutdown: broadcast::Receiver<()>,
    refresh_interval: Duration,
) {
    let classifier = ErrorClassifier::new();
    let mut ticker = interval(refresh_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; the initial load has already
    // populated the market slices, so consume it before looping.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = shutdown.recv() => break,
            _ = ticker.tick() => {
                refresh_once(&controller, &event_sender, &classifier).await;
            }
        }
    }
}

async fn refresh_once(
    controller: &DashboardController,
    event_sender: &EventSender,
    classifier: &ErrorClassifier,
) {
    match controller.refresh_market().await {
        Ok(count) => {
            event_sender
                .send_market_event(
                    format!("Market snapshot updated ({} indices)", count),
                    EventType::Refresh,
                    LogLevel::Debug,
                )
                .await;
        }
        Err(e) => {
            // Transient failures must not stop the loop; report and move on.
            let log_level = classifier.classify_refresh_error(&e);
            event_sender
                .send_market_event(
                    format!("Market refresh failed: {}", e),
                    EventType::Error,
                    log_level,
                )
                .await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockDashboardApi;
    use crate::api::error::ApiError;
    use crate::events::Event;
    use crate::models::{Fund, TrendPoint};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::mpsc;

    fn fund_with_value(value: f64) -> Fund {
        Fund {
            id: "F1".to_string(),
            code: "000300".to_string(),
            name: "CSI 300".to_string(),
            category: "Equity".to_string(),
            value,
            change: 0.0,
            change_percent: 0.0,
            current_nav: 1.0,
        }
    }

    fn spawn_refresher(
        mock: MockDashboardApi,
        interval: Duration,
    ) -> (
        DashboardController,
        mpsc::Receiver<Event>,
        broadcast::Sender<()>,
        tokio::task::JoinHandle<()>,
    ) {
        let controller = DashboardController::new(Arc::new(mock), "user-1138".to_string());
        let (event_sender, event_receiver) = mpsc::channel(100);
        let (shutdown_sender, shutdown_receiver) = broadcast::channel(1);

        let task_controller = controller.clone();
        let handle = tokio::spawn(async move {
            market_refresh_task_with_interval(
                task_controller,
                EventSender::new(event_sender),
                shutdown_receiver,
                interval,
            )
            .await;
        });

        (controller, event_receiver, shutdown_sender, handle)
    }

    #[tokio::test]
    // Each tick replaces the snapshot; after two ticks the displayed data is
    // the second payload.
    async fn test_ticks_apply_latest_snapshot() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_mock = Arc::clone(&calls);

        let mut mock = MockDashboardApi::new();
        mock.expect_market_funds().returning(move || {
            let tick = calls_in_mock.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(vec![fund_with_value(1000.0 * tick as f64)])
        });
        mock.expect_index_trends().returning(|| {
            Ok(vec![TrendPoint {
                time: "10:00".to_string(),
                value: 1.0,
            }])
        });

        let (controller, _events, shutdown, handle) =
            spawn_refresher(mock, Duration::from_millis(20));

        // Wait until at least two ticks have landed.
        while calls.load(Ordering::SeqCst) < 2 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        let _ = shutdown.send(());
        handle.await.unwrap();

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.funds.len(), 1);
        let seen = calls.load(Ordering::SeqCst);
        assert_eq!(snapshot.funds[0].value, 1000.0 * seen as f64);
    }

    #[tokio::test]
    // A failing tick reports an event and the loop keeps polling.
    async fn test_failures_are_swallowed_and_loop_continues() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_mock = Arc::clone(&calls);

        let mut mock = MockDashboardApi::new();
        mock.expect_market_funds().returning(move || {
            let tick = calls_in_mock.fetch_add(1, Ordering::SeqCst) + 1;
            if tick == 1 {
                Err(ApiError::Http {
                    status: 503,
                    message: String::new(),
                })
            } else {
                Ok(vec![fund_with_value(2000.0)])
            }
        });
        mock.expect_index_trends().returning(|| Ok(vec![]));

        let (controller, mut events, shutdown, handle) =
            spawn_refresher(mock, Duration::from_millis(20));

        while calls.load(Ordering::SeqCst) < 2 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        let _ = shutdown.send(());
        handle.await.unwrap();

        let first = events.recv().await.unwrap();
        assert_eq!(first.event_type, EventType::Error);
        assert!(first.msg.contains("Market refresh failed"));

        // The loop survived the failure and applied the next snapshot.
        assert_eq!(controller.snapshot().funds.len(), 1);
    }

    #[tokio::test]
    // After shutdown no further refresh calls are issued.
    async fn test_shutdown_stops_refreshing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_mock = Arc::clone(&calls);

        let mut mock = MockDashboardApi::new();
        mock.expect_market_funds().returning(move || {
            calls_in_mock.fetch_add(1, Ordering::SeqCst);
            Ok(vec![fund_with_value(1000.0)])
        });
        mock.expect_index_trends().returning(|| Ok(vec![]));

        let (_controller, _events, shutdown, handle) =
            spawn_refresher(mock, Duration::from_millis(20));

        while calls.load(Ordering::SeqCst) < 1 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        let _ = shutdown.send(());
        handle.await.unwrap();

        let calls_at_shutdown = calls.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(calls.load(Ordering::SeqCst), calls_at_shutdown);
    }
}
