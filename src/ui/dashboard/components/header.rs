//! Dashboard header component
//!
//! Renders the title and the countdown to the next poll

use super::super::state::{ConnectionState, DashboardState};
use crate::consts::cli_consts::polling;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

pub fn render_header(f: &mut Frame, area: Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let out_of_range = state.board.cards.out_of_range();
    let title_text = if out_of_range > 0 {
        format!(
            "AGRI SENSOR DASHBOARD v{} - {} READINGS OUT OF RANGE",
            version, out_of_range
        )
    } else {
        format!("AGRI SENSOR DASHBOARD v{}", version)
    };
    let title_color = if out_of_range > 0 {
        Color::LightYellow
    } else {
        Color::Cyan
    };

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let (progress_text, gauge_color, progress_percent) = status_gauge(state);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}

/// Label, color and fill for the poll gauge.
fn status_gauge(state: &DashboardState) -> (String, Color, u16) {
    let interval = polling::poll_interval();
    let (elapsed, remaining_secs) = match state.stats.last_attempt {
        Some(at) => {
            let elapsed = at.elapsed().min(interval);
            (elapsed, (interval - elapsed).as_secs())
        }
        None => (interval, 0),
    };
    let progress = ((elapsed.as_secs_f64() / interval.as_secs_f64()) * 100.0) as u16;
    let last_update = state
        .stats
        .last_success_clock
        .as_deref()
        .unwrap_or("--:--:--");

    match state.connection_state() {
        ConnectionState::Connecting => {
            // Loops every 20 ticks while waiting for the first poll
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (
                format!("CONNECTING - {}", state.base_url),
                Color::LightBlue,
                progress,
            )
        }
        ConnectionState::Live => (
            format!(
                "LIVE - {} readings, updated {} (next in {}s)",
                state.stats.readings, last_update, remaining_secs
            ),
            Color::LightGreen,
            progress.min(100),
        ),
        ConnectionState::Stale => (
            format!(
                "STALE - last update {}, {} failed polls",
                last_update, state.stats.consecutive_failures
            ),
            Color::LightYellow,
            100,
        ),
        ConnectionState::Offline => (
            format!(
                "OFFLINE - {} failed polls (retry in {}s)",
                state.stats.consecutive_failures, remaining_secs
            ),
            Color::LightRed,
            progress.min(100),
        ),
    }
}
