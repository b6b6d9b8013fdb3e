//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use ratatui::prelude::Color;

/// Get a ratatui color for an event based on where it came from
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Refresh => Color::Cyan,
        Source::Dashboard => Color::Green,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min_sec)) = (date_part.get(5..10), time_part.get(0..8)) {
            return format!("{} {}", month_day, hour_min_sec);
        }
    }
    timestamp.to_string()
}

/// Shorten transport errors to something that fits one log line
pub fn clean_http_error_message(msg: &str) -> String {
    if !msg.contains("Reqwest error") {
        return msg.to_string();
    }
    let lower = msg.to_lowercase();
    if lower.contains("timed out") || lower.contains("timeout") {
        return "Refresh failed: request timed out".to_string();
    }
    if lower.contains("connect") {
        return "Refresh failed: sensor service unreachable".to_string();
    }
    "Refresh failed: network error".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2025-03-14 09:26:53"),
            "03-14 09:26:53"
        );
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_clean_http_error_message() {
        assert_eq!(
            clean_http_error_message(
                "Refresh failed: Reqwest error: error sending request for url (http://localhost:5000/latest-data): client error (Connect)"
            ),
            "Refresh failed: sensor service unreachable"
        );
        assert_eq!(
            clean_http_error_message("Refresh failed: Reqwest error: operation timed out"),
            "Refresh failed: request timed out"
        );
        assert_eq!(
            clean_http_error_message("Refresh failed: HTTP error with status 503: down"),
            "Refresh failed: HTTP error with status 503: down"
        );
    }
}
