//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::board::CardStatus;
use crate::events::Worker;
use ratatui::prelude::Color;

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::Poller => Color::Cyan,
        Worker::Dashboard => Color::Green,
    }
}

/// Border and value color for a card.
pub fn card_status_color(status: CardStatus) -> Color {
    match status {
        CardStatus::Optimal => Color::LightGreen,
        CardStatus::Low => Color::LightBlue,
        CardStatus::High => Color::LightRed,
        CardStatus::Unknown => Color::Gray,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // "YYYY-MM-DD HH:MM:SS" -> "MM-DD HH:MM:SS"
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let Some(month_day) = date_part.get(5..10) {
            return format!("{} {}", month_day, time_part);
        }
    }
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("error sending request") || msg.contains("Connection refused") {
        return "Data server unreachable - retrying...".to_string();
    }
    if msg.contains("operation timed out") || msg.contains("TimedOut") {
        return "Request timed out - retrying...".to_string();
    }
    msg.to_string()
}

/// First, middle and last label, for a sparse x axis.
pub fn sample_axis_labels(labels: &[String]) -> Vec<String> {
    match labels.len() {
        0 => Vec::new(),
        1 => vec![labels[0].clone()],
        2 => labels.to_vec(),
        n => vec![
            labels[0].clone(),
            labels[n / 2].clone(),
            labels[n - 1].clone(),
        ],
    }
}

/// Numeric axis labels for `[lo, hi]`.
pub fn value_axis_labels(bounds: [f64; 2]) -> Vec<String> {
    let [lo, hi] = bounds;
    let mid = (lo + hi) / 2.0;
    [lo, mid, hi].iter().map(|v| format!("{:.1}", v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_timestamp_drops_year() {
        assert_eq!(
            format_compact_timestamp("2024-05-01 12:30:45"),
            "05-01 12:30:45"
        );
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn axis_labels_are_sampled() {
        let labels: Vec<String> = (0..7).map(|i| format!("t{}", i)).collect();
        assert_eq!(sample_axis_labels(&labels), vec!["t0", "t3", "t6"]);
        assert!(sample_axis_labels(&[]).is_empty());
        assert_eq!(sample_axis_labels(&labels[..1]), vec!["t0"]);
    }

    #[test]
    fn value_labels_span_bounds() {
        assert_eq!(value_axis_labels([0.0, 10.0]), vec!["0.0", "5.0", "10.0"]);
    }

    #[test]
    fn network_errors_are_shortened() {
        let cleaned = clean_http_error_message(
            "Poll failed: Reqwest error: error sending request for url (http://localhost:5000/data)",
        );
        assert_eq!(cleaned, "Data server unreachable - retrying...");
        assert_eq!(clean_http_error_message("Empty"), "Empty");
    }
}
