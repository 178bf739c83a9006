//! Latest-value cards
//!
//! One bordered box per field, colored by where the value sits in its range

use super::super::utils::card_status_color;
use crate::board::{Card, CardPanel};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const CARDS_PER_ROW: usize = 5;

pub fn render_cards(f: &mut Frame, area: Rect, panel: &CardPanel) {
    let block = Block::default()
        .title("LATEST READING")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if panel.is_empty() {
        let waiting = Paragraph::new("Waiting for first reading...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(waiting, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows: Vec<&[Card]> = panel.cards().chunks(CARDS_PER_ROW).collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows.len() as u32); rows.len()])
        .split(inner);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, CARDS_PER_ROW as u32); CARDS_PER_ROW])
            .split(*row_area);
        for (card, cell) in row.iter().zip(cells.iter()) {
            render_card(f, *cell, card);
        }
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &Card) {
    let color = card_status_color(card.status);
    let value = if card.value.is_empty() {
        Line::from("-")
    } else {
        Line::from(card.value.as_str())
    };
    let widget = Paragraph::new(value)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(card.title.as_str())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(widget, area);
}
