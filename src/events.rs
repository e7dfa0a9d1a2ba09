//! Event System
//!
//! Types and implementations for worker events and the activity log

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Worker that polls the backend for market snapshots and trends.
    MarketRefresher,
    /// Worker that loads donation projects and contribution history.
    DonationLoader,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn market_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::MarketRefresher, msg, event_type, log_level)
    }

    pub fn donations_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::DonationLoader, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Success events are always shown, whatever their level.
    fn test_success_events_always_display() {
        let event = Event::market_with_level(
            "Market snapshot updated".to_string(),
            EventType::Success,
            LogLevel::Trace,
        );
        assert!(event.should_display());
    }

    #[test]
    fn test_display_includes_type_and_message() {
        let event = Event::donations_with_level(
            "Loaded 3 projects".to_string(),
            EventType::Success,
            LogLevel::Info,
        );
        let rendered = event.to_string();
        assert!(rendered.starts_with("Success ["));
        assert!(rendered.ends_with("Loaded 3 projects"));
    }
}
