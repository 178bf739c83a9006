//! Dashboard state management
//!
//! Contains the main dashboard state struct and poll bookkeeping

use super::terminal_chart::TerminalChart;
use crate::board::{Board, DashboardError, PageLayout};
use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, polling, ui};
use crate::events::Event;
use crate::poller::PollMessage;
use crate::ui::app::UIConfig;

use chrono::Local;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How fresh the data on screen is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Nothing received yet.
    Connecting,
    /// Last poll succeeded recently.
    Live,
    /// Data on screen is older than a few poll intervals.
    Stale,
    /// Never succeeded and at least one poll failed.
    Offline,
}

/// Counters over every poll seen by the dashboard.
#[derive(Debug, Clone, Default)]
pub struct PollStats {
    pub polls: u64,
    pub successes: u64,
    pub consecutive_failures: u32,
    /// Readings in the most recent successful poll.
    pub readings: usize,
    pub last_attempt: Option<Instant>,
    pub last_success: Option<Instant>,
    /// Wall-clock time of the last success, `HH:MM:SS`.
    pub last_success_clock: Option<String>,
}

impl PollStats {
    pub fn record_success(&mut self, readings: usize) {
        let now = Instant::now();
        self.polls += 1;
        self.successes += 1;
        self.consecutive_failures = 0;
        self.readings = readings;
        self.last_attempt = Some(now);
        self.last_success = Some(now);
        self.last_success_clock = Some(Local::now().format("%H:%M:%S").to_string());
    }

    pub fn record_failure(&mut self) {
        self.polls += 1;
        self.consecutive_failures += 1;
        self.last_attempt = Some(Instant::now());
    }

    pub fn connection_state(&self, poll_interval: Duration) -> ConnectionState {
        match self.last_success {
            None if self.consecutive_failures > 0 => ConnectionState::Offline,
            None => ConnectionState::Connecting,
            Some(at) if at.elapsed() > poll_interval * ui::STALE_AFTER_INTERVALS => {
                ConnectionState::Stale
            }
            Some(_) => ConnectionState::Live,
        }
    }
}

/// Dashboard state: the board, its page and the activity log.
#[derive(Debug)]
pub struct DashboardState {
    /// Base URL of the data server being polled.
    pub base_url: String,
    /// Regions the board is mounted on.
    pub page: PageLayout,
    /// Charts and cards.
    pub board: Board<TerminalChart>,
    /// Messages from the poller waiting to be applied
    pub pending_messages: VecDeque<PollMessage>,
    /// Activity logs for display (last 100 events)
    pub activity_logs: VecDeque<Event>,
    pub stats: PollStats,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    /// Mounts every chart on the standard page.
    pub fn new(base_url: String, ui_config: UIConfig) -> Result<Self, DashboardError> {
        Self::with_page(base_url, ui_config, PageLayout::standard())
    }

    pub fn with_page(
        base_url: String,
        ui_config: UIConfig,
        page: PageLayout,
    ) -> Result<Self, DashboardError> {
        let board = Board::initialize(&page, TerminalChart::new)?;
        Ok(Self {
            base_url,
            page,
            board,
            pending_messages: VecDeque::new(),
            activity_logs: VecDeque::new(),
            stats: PollStats::default(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
        })
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.stats.connection_state(polling::poll_interval())
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Queue a poller message for the next update
    pub fn add_message(&mut self, message: PollMessage) {
        self.pending_messages.push_back(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_state_transitions() {
        let interval = Duration::from_secs(5);
        let mut stats = PollStats::default();
        assert_eq!(stats.connection_state(interval), ConnectionState::Connecting);

        stats.record_failure();
        assert_eq!(stats.connection_state(interval), ConnectionState::Offline);

        stats.record_success(3);
        assert_eq!(stats.connection_state(interval), ConnectionState::Live);
        assert_eq!(stats.consecutive_failures, 0);
        assert_eq!(stats.polls, 2);

        stats.last_success = Instant::now().checked_sub(Duration::from_secs(60));
        if stats.last_success.is_some() {
            assert_eq!(stats.connection_state(interval), ConnectionState::Stale);
        }
    }

    #[test]
    fn activity_log_is_bounded() {
        let mut state =
            DashboardState::new("http://test".to_string(), UIConfig::default()).unwrap();
        for i in 0..(MAX_ACTIVITY_LOGS + 10) {
            state.add_to_activity_log(Event::dashboard(
                format!("event {}", i),
                crate::events::EventType::Refresh,
            ));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs.front().unwrap().msg, "event 10");
    }
}
