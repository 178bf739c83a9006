//! CLI command messaging system
//!
//! Consistent tagged output for one-shot commands like `fetch`, `set-url`
//! and `reset`.

use crate::board::{Card, CardStatus, FieldSummary};

const COLOR_INFO: &str = "\x1b[1;33m";
const COLOR_WARN: &str = "\x1b[1;91m";
const COLOR_ERROR: &str = "\x1b[1;31m";
const COLOR_SUCCESS: &str = "\x1b[1;32m";
const COLOR_RESET: &str = "\x1b[0m";

/// `[TAG] title`, followed by a tab and `details` when present.
fn tagged(color: &str, tag: &str, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{}[{}]{} {}", color, tag, COLOR_RESET, title)
    } else {
        format!("{}[{}]{} {}\t {}", color, tag, COLOR_RESET, title, details)
    }
}

pub fn print_info(title: &str, details: &str) {
    println!("{}", tagged(COLOR_INFO, "INFO", title, details));
}

pub fn print_warn(title: &str, details: &str) {
    println!("{}", tagged(COLOR_WARN, "WARN", title, details));
}

/// Errors go to stderr.
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("{}", tagged(COLOR_ERROR, "ERROR", title, ""));
    if let Some(details) = details {
        eprintln!("{}", tagged(COLOR_ERROR, "ERROR", "Details:", details));
    }
}

pub fn print_success(title: &str, details: &str) {
    println!("{}", tagged(COLOR_SUCCESS, "SUCCESS", title, details));
}

/// One latest-value card as a table row.
pub fn format_card(card: &Card) -> String {
    let value = if card.value.is_empty() { "-" } else { &card.value };
    let color = match card.status {
        CardStatus::Optimal => COLOR_SUCCESS,
        CardStatus::Low | CardStatus::High => COLOR_WARN,
        CardStatus::Unknown => COLOR_RESET,
    };
    format!(
        "{:<18} {:>10}  {}{}{}",
        card.title, value, color, card.status, COLOR_RESET
    )
}

/// One history summary as a table row: mean, spread, range and trend.
pub fn format_summary(summary: &FieldSummary) -> String {
    let spread = summary
        .std_dev
        .map(|sd| format!("±{:.2}", sd))
        .unwrap_or_default();
    let trend = summary
        .trend
        .map(|t| format!("{} {}", t.arrow(), t))
        .unwrap_or_default();
    format!(
        "{:<18} {:>9.2} {:>8}  [{:.2}, {:.2}]  {}",
        summary.field.title(),
        summary.mean,
        spread,
        summary.min,
        summary.max,
        trend
    )
    .trim_end()
    .to_string()
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

/// Macro for CLI errors
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Trend;
    use crate::readings::SensorField;

    #[test]
    fn tagged_omits_empty_details() {
        assert_eq!(tagged("", "INFO", "Saved", ""), "[INFO]\x1b[0m Saved");
        assert_eq!(
            tagged("", "INFO", "Saved", "to disk"),
            "[INFO]\x1b[0m Saved\t to disk"
        );
    }

    #[test]
    fn card_row_shows_placeholder_and_status() {
        let card = Card {
            field: SensorField::SoilPh,
            title: "soil ph".to_string(),
            value: String::new(),
            status: CardStatus::Unknown,
        };
        let row = format_card(&card);
        assert!(row.starts_with("soil ph"));
        assert!(row.contains(" -  "));
        assert!(row.contains("unknown"));
    }

    #[test]
    fn summary_row_shows_statistics_and_trend() {
        let summary = FieldSummary {
            field: SensorField::SoilMoisture,
            count: 10,
            mean: 45.0,
            min: 40.5,
            max: 49.5,
            std_dev: Some(3.0277),
            trend: Some(Trend::Increasing),
        };
        let row = format_summary(&summary);
        assert!(row.starts_with(&SensorField::SoilMoisture.title()));
        assert!(row.contains("45.00"));
        assert!(row.contains("±3.03"));
        assert!(row.contains("[40.50, 49.50]"));
        assert!(row.ends_with("↑ increasing"));

        let short = format_summary(&FieldSummary {
            std_dev: None,
            trend: None,
            ..summary
        });
        assert!(!short.contains('±'));
        assert!(short.ends_with("[40.50, 49.50]"));
    }
}
