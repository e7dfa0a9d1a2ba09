//! Dashboard view state management

use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, market};
use crate::controller::{DashboardController, DashboardData, SharedDashboardData};
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// View-side dashboard state: a data snapshot plus presentation bookkeeping.
/// Holds a handle to the shared container; the workers write into it and the
/// view re-snapshots it every tick.
pub struct DashboardViewState {
    /// The user the session belongs to.
    user_id: String,
    /// Handle to the container the controller and workers write into.
    shared: SharedDashboardData,
    /// Snapshot of the dashboard data, refreshed every UI tick.
    pub data: DashboardData,
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Latest version string, if newer than the running one.
    pub latest_version: Option<String>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    /// When the last successful market refresh landed.
    last_refresh: Option<Instant>,
    /// Timestamp string of the last successful market refresh.
    last_refresh_timestamp: Option<String>,
    /// Number of failed refresh ticks seen so far.
    refresh_failures: usize,
    /// Cadence of the market refresh worker.
    refresh_interval: Duration,
}

impl DashboardViewState {
    /// Creates a new instance of the dashboard view state.
    pub fn new(
        controller: &DashboardController,
        environment: Environment,
        start_time: Instant,
        ui_config: UIConfig,
    ) -> Self {
        let shared = controller.data();
        let data = controller.snapshot();
        Self {
            user_id: controller.user_id().to_string(),
            shared,
            data,
            environment,
            start_time,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            latest_version: ui_config.latest_version,
            with_background_color: ui_config.with_background_color,
            tick: 0,
            last_refresh: None,
            last_refresh_timestamp: None,
            refresh_failures: 0,
            refresh_interval: market::refresh_interval(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn last_refresh_timestamp(&self) -> &Option<String> {
        &self.last_refresh_timestamp
    }

    pub fn refresh_failures(&self) -> usize {
        self.refresh_failures
    }

    // Setter methods for private fields (for updaters)
    pub fn mark_refresh_success(&mut self, timestamp: String) {
        self.last_refresh = Some(Instant::now());
        self.last_refresh_timestamp = Some(timestamp);
    }

    pub fn mark_refresh_failure(&mut self) {
        self.refresh_failures += 1;
    }

    /// Take a fresh snapshot from the shared container.
    pub fn refresh_data_snapshot(&mut self) {
        self.data = self
            .shared
            .read()
            .expect("dashboard state lock poisoned")
            .clone();
    }

    /// Progress towards the next market refresh as (percent, seconds left).
    pub fn refresh_progress(&self) -> (u16, u64) {
        match self.last_refresh {
            Some(at) => {
                let elapsed = at.elapsed();
                let remaining = self.refresh_interval.saturating_sub(elapsed);
                let percent = if self.refresh_interval.is_zero() {
                    100
                } else {
                    ((elapsed.as_millis() * 100) / self.refresh_interval.as_millis()).min(100)
                        as u16
                };
                (percent, remaining.as_secs())
            }
            None => (100, 0),
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}
