//! Line chart components

use super::super::state::DashboardState;
use super::super::terminal_chart::TerminalChart;
use super::super::utils::{sample_axis_labels, value_axis_labels};
use crate::board::{ChartId, ChartWidget};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::symbols;
use ratatui::widgets::{
    Axis, Block, BorderType, Borders, Chart, Dataset, LegendPosition, Paragraph,
};
use std::collections::HashMap;

/// Draw every chart in the region named by its mount id.
pub fn render_charts(f: &mut Frame, regions: &HashMap<&'static str, Rect>, state: &DashboardState) {
    for (id, chart) in state.board.registry.iter() {
        if let Some(area) = regions.get(id.mount_id()) {
            render_chart(f, *area, *id, chart);
        }
    }
}

fn render_chart(f: &mut Frame, area: Rect, id: ChartId, chart: &TerminalChart) {
    let block = Block::default()
        .title(id.title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let data = chart.data();
    if data.labels.is_empty() {
        let waiting = Paragraph::new("Waiting for data...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(waiting, area);
        return;
    }

    let datasets: Vec<Dataset> = data
        .series
        .iter()
        .zip(chart.points())
        .map(|(series, points)| {
            Dataset::default()
                .name(series.spec.label)
                .marker(symbols::Marker::Braille)
                .graph_type(chart.config().graph_type)
                .style(Style::default().fg(series.spec.color))
                .data(points)
        })
        .collect();

    let x_axis = Axis::default()
        .style(Style::default().fg(Color::DarkGray))
        .bounds(chart.x_bounds())
        .labels(sample_axis_labels(&data.labels));
    let y_axis = Axis::default()
        .style(Style::default().fg(Color::DarkGray))
        .bounds(chart.y_bounds())
        .labels(value_axis_labels(chart.y_bounds()));

    let widget = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(Some(LegendPosition::TopRight))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));
    f.render_widget(widget, area);
}
