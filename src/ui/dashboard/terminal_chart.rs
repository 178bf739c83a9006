//! Chart widget backed by a ratatui line chart.

use crate::board::{ChartConfig, ChartData, ChartWidget};

/// Keeps the plotted points alongside the data so rendering borrows them
/// instead of rebuilding every frame.
#[derive(Debug, Clone)]
pub struct TerminalChart {
    config: ChartConfig,
    data: ChartData,
    points: Vec<Vec<(f64, f64)>>,
    y_bounds: [f64; 2],
}

impl TerminalChart {
    pub fn new(config: ChartConfig) -> Self {
        let data = ChartData::from_config(&config);
        let points = vec![Vec::new(); data.series.len()];
        Self {
            config,
            data,
            points,
            y_bounds: [0.0, 1.0],
        }
    }

    /// Plotted points per series; missing values are left out.
    pub fn points(&self) -> &[Vec<(f64, f64)>] {
        &self.points
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        let last = self.data.labels.len().saturating_sub(1).max(1);
        [0.0, last as f64]
    }

    pub fn y_bounds(&self) -> [f64; 2] {
        self.y_bounds
    }
}

impl ChartWidget for TerminalChart {
    fn config(&self) -> &ChartConfig {
        &self.config
    }

    fn data(&self) -> &ChartData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut ChartData {
        &mut self.data
    }

    fn redraw(&mut self) {
        self.points = self
            .data
            .series
            .iter()
            .map(|series| {
                series
                    .values
                    .iter()
                    .enumerate()
                    .filter_map(|(x, value)| value.map(|y| (x as f64, y)))
                    .collect()
            })
            .collect();
        self.y_bounds = value_bounds(self.points.iter().flatten().map(|(_, y)| *y));
    }
}

/// Y-axis range covering `values` with a little headroom.
fn value_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if min > max {
        return [0.0, 1.0];
    }
    if min == max {
        return [min - 1.0, max + 1.0];
    }
    let pad = (max - min) * 0.05;
    [min - pad, max + pad]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{ChartId, chart_configs};

    fn moisture_chart() -> TerminalChart {
        let config = chart_configs()
            .into_iter()
            .find(|c| c.id == ChartId::SoilMoisture)
            .unwrap();
        TerminalChart::new(config)
    }

    #[test]
    fn redraw_rebuilds_points_and_skips_gaps() {
        let mut chart = moisture_chart();
        chart.data_mut().labels = vec!["a".into(), "b".into(), "c".into()];
        chart.data_mut().series[0].values = vec![Some(40.0), None, Some(50.0)];
        chart.redraw();

        assert_eq!(chart.points()[0], vec![(0.0, 40.0), (2.0, 50.0)]);
        assert_eq!(chart.x_bounds(), [0.0, 2.0]);
        let [lo, hi] = chart.y_bounds();
        assert!(lo < 40.0 && hi > 50.0);
    }

    #[test]
    fn bounds_for_flat_and_empty_series() {
        assert_eq!(value_bounds([5.0, 5.0].into_iter()), [4.0, 6.0]);
        assert_eq!(value_bounds(std::iter::empty()), [0.0, 1.0]);
    }
}
