//! Dashboard main renderer

use super::components::{cards, charts, footer, header, insights, logs};
use super::state::DashboardState;
use crate::board::CARD_PANEL_MOUNT;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
        .split(main_chunks[1]);

    // Page regions are looked up by mount id, same as at initialization
    let regions = state.page.regions(content_chunks[0]);
    if let Some(area) = regions.get(CARD_PANEL_MOUNT) {
        cards::render_cards(f, *area, &state.board.cards);
    }
    charts::render_charts(f, &regions, state);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(insights::panel_height(&state.board.insights)),
            Constraint::Fill(1),
        ])
        .split(content_chunks[1]);
    insights::render_insights(f, side_chunks[0], &state.board.insights);
    logs::render_logs_panel(f, side_chunks[1], state);
    footer::render_footer(f, main_chunks[2], state);
}
