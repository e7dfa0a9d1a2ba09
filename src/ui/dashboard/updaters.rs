//! Dashboard view state update logic
//!
//! Contains the methods for updating view state from worker events

use super::state::DashboardViewState;

use crate::events::{Event as WorkerEvent, EventType, Worker};

impl DashboardViewState {
    /// Update the view state with a new tick, a fresh data snapshot, and any
    /// queued worker events.
    pub fn update(&mut self) {
        self.tick += 1;

        // The workers write into the shared container; pick up their latest.
        self.refresh_data_snapshot();

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            // Add to activity logs for display
            self.add_to_activity_log(event.clone());

            // Process the event for state updates
            self.process_event(&event);
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &WorkerEvent) {
        if event.worker != Worker::MarketRefresher {
            return;
        }
        match event.event_type {
            EventType::Refresh | EventType::Success => {
                self.mark_refresh_success(event.timestamp.clone());
            }
            EventType::Error => {
                self.mark_refresh_failure();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockDashboardApi;
    use crate::controller::DashboardController;
    use crate::environment::Environment;
    use crate::events::Event;
    use crate::logging::LogLevel;
    use crate::ui::app::UIConfig;
    use std::sync::Arc;
    use std::time::Instant;

    fn view_state() -> DashboardViewState {
        let controller =
            DashboardController::new(Arc::new(MockDashboardApi::new()), "user-1138".to_string());
        DashboardViewState::new(
            &controller,
            Environment::Local,
            Instant::now(),
            UIConfig::new(false, None),
        )
    }

    #[test]
    // Refresh events should update the countdown anchor and the timestamp.
    fn test_refresh_event_marks_refresh() {
        let mut state = view_state();
        state.add_event(Event::market_with_level(
            "Market snapshot updated (3 indices)".to_string(),
            EventType::Refresh,
            LogLevel::Debug,
        ));

        state.update();

        assert!(state.last_refresh_timestamp().is_some());
        assert_eq!(state.refresh_failures(), 0);
        assert_eq!(state.activity_logs.len(), 1);
    }

    #[test]
    fn test_error_event_counts_failure() {
        let mut state = view_state();
        state.add_event(Event::market_with_level(
            "Market refresh failed: timeout".to_string(),
            EventType::Error,
            LogLevel::Warn,
        ));
        state.add_event(Event::donations_with_level(
            "Failed to load donation data".to_string(),
            EventType::Error,
            LogLevel::Warn,
        ));

        state.update();

        // Only market refresher errors count as refresh failures.
        assert_eq!(state.refresh_failures(), 1);
        assert_eq!(state.activity_logs.len(), 2);
    }

    #[test]
    // The activity log is bounded; old entries fall off the front.
    fn test_activity_log_is_bounded() {
        let mut state = view_state();
        for i in 0..250 {
            state.add_event(Event::market_with_level(
                format!("tick {}", i),
                EventType::Refresh,
                LogLevel::Debug,
            ));
        }

        state.update();

        assert_eq!(
            state.activity_logs.len(),
            crate::consts::cli_consts::MAX_ACTIVITY_LOGS
        );
        assert!(state.activity_logs.back().unwrap().msg.contains("249"));
    }
}
