//! History summary table
//!
//! Mean, spread, range and recent direction of every field

use crate::board::{FieldSummary, InsightPanel, Trend};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

/// Rows the panel needs: borders, header and one line per field.
pub fn panel_height(panel: &InsightPanel) -> u16 {
    panel.summaries().len().max(1) as u16 + 3
}

pub fn render_insights(f: &mut Frame, area: Rect, panel: &InsightPanel) {
    let block = Block::default()
        .title(format!("HISTORY ({} readings)", panel.readings()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if panel.summaries().is_empty() {
        let waiting = Paragraph::new("No history yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(waiting, area);
        return;
    }

    let header = Row::new(vec!["field", "mean", "sd", "min-max", ""]).style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );
    let rows: Vec<Row> = panel.summaries().iter().map(summary_row).collect();
    let widths = [
        Constraint::Min(14),
        Constraint::Length(7),
        Constraint::Length(6),
        Constraint::Length(13),
        Constraint::Length(1),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

fn summary_row(summary: &FieldSummary) -> Row<'static> {
    let (arrow, color) = match summary.trend {
        Some(Trend::Steady) => (Trend::Steady.arrow(), Color::Gray),
        Some(trend) => (trend.arrow(), Color::LightYellow),
        None => ("", Color::Gray),
    };
    Row::new(vec![
        Cell::from(summary.field.title()),
        Cell::from(format!("{:.1}", summary.mean)),
        Cell::from(
            summary
                .std_dev
                .map(|sd| format!("{:.1}", sd))
                .unwrap_or_else(|| "-".to_string()),
        ),
        Cell::from(format!("{:.1}-{:.1}", summary.min, summary.max)),
        Cell::from(Span::styled(arrow, Style::default().fg(color))),
    ])
}
