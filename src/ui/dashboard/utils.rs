//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Worker;
use ratatui::prelude::Color;

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::MarketRefresher => Color::Cyan,
        Worker::DonationLoader => Color::Magenta,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    // Replace verbose HTTP error patterns with cleaner messages
    if msg.contains("Reqwest error") && msg.contains("ConnectTimeout") {
        return "Connection timeout - will retry next tick".to_string();
    }
    if msg.contains("Reqwest error") && msg.contains("TimedOut") {
        return "Request timed out - will retry next tick".to_string();
    }
    if msg.contains("Reqwest error") {
        return "Network error - will retry next tick".to_string();
    }
    // Return original message if no HTTP error pattern detected
    msg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2026-08-07 14:03:22"),
            "08-07 14:03"
        );
        // Unparseable input is passed through
        assert_eq!(format_compact_timestamp("bogus"), "bogus");
    }

    #[test]
    fn test_clean_http_error_message() {
        assert_eq!(
            clean_http_error_message("Market refresh failed: Reqwest error: ConnectTimeout"),
            "Connection timeout - will retry next tick"
        );
        assert_eq!(clean_http_error_message("plain message"), "plain message");
    }
}
