//! Dashboard footer component
//!
//! Key hints and the endpoint being polled

use super::super::state::DashboardState;
use crate::consts::cli_consts::polling;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_footer(f: &mut Frame, area: Rect, state: &DashboardState) {
    let line = Line::from(vec![
        Span::styled(
            "[Q] Quit | Agri Sensor Dashboard",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                " | {}{} every {}s",
                state.base_url.trim_end_matches('/'),
                polling::DATA_ENDPOINT,
                polling::poll_interval().as_secs()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let footer = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Thick),
    );
    f.render_widget(footer, area);
}
