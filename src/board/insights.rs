//! Per-field statistics over the whole history.

use crate::readings::{SensorField, SensorReading};

/// Readings used for the trend line, newest last.
pub const TREND_WINDOW: usize = 10;

/// Slope (units per reading) above which a field counts as moving.
pub const TREND_SLOPE_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Steady,
}

impl Trend {
    pub fn from_slope(slope: f64) -> Self {
        if slope > TREND_SLOPE_THRESHOLD {
            Trend::Increasing
        } else if slope < -TREND_SLOPE_THRESHOLD {
            Trend::Decreasing
        } else {
            Trend::Steady
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Increasing => "↑",
            Trend::Decreasing => "↓",
            Trend::Steady => "→",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSummary {
    pub field: SensorField,
    /// Readings that carried a value for the field.
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation; `None` below two values.
    pub std_dev: Option<f64>,
    /// `None` until the history holds a full trend window.
    pub trend: Option<Trend>,
}

/// Summary of one field, or `None` when no reading has a value for it.
pub fn summarize(field: SensorField, history: &[SensorReading]) -> Option<FieldSummary> {
    let values: Vec<f64> = history
        .iter()
        .filter_map(|r| field.value(r))
        .filter(|v| v.is_finite())
        .collect();
    if values.is_empty() {
        return None;
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let std_dev = (count > 1).then(|| {
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        variance.sqrt()
    });

    Some(FieldSummary {
        field,
        count,
        mean,
        min,
        max,
        std_dev,
        trend: trend(field, history),
    })
}

/// Direction of the least-squares line through the last [`TREND_WINDOW`] readings.
fn trend(field: SensorField, history: &[SensorReading]) -> Option<Trend> {
    if history.len() < TREND_WINDOW {
        return None;
    }
    let window = &history[history.len() - TREND_WINDOW..];
    let points: Vec<(f64, f64)> = window
        .iter()
        .enumerate()
        .filter_map(|(x, r)| {
            field
                .value(r)
                .filter(|v| v.is_finite())
                .map(|y| (x as f64, y))
        })
        .collect();
    slope(&points).map(Trend::from_slope)
}

fn slope(points: &[(f64, f64)]) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;
    let sxx: f64 = points.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();
    let sxy: f64 = points
        .iter()
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();
    (sxx > 0.0).then(|| sxy / sxx)
}

/// Summaries for every field with at least one value, in card order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsightPanel {
    summaries: Vec<FieldSummary>,
    readings: usize,
}

impl InsightPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, history: &[SensorReading]) {
        self.readings = history.len();
        self.summaries = SensorField::card_order()
            .filter_map(|field| summarize(field, history))
            .collect();
    }

    pub fn summaries(&self) -> &[FieldSummary] {
        &self.summaries
    }

    /// Length of the history the summaries were computed from.
    pub fn readings(&self) -> usize {
        self.readings
    }

    /// Fields whose recent trend is not steady.
    pub fn moving(&self) -> impl Iterator<Item = &FieldSummary> {
        self.summaries
            .iter()
            .filter(|s| matches!(s.trend, Some(Trend::Increasing | Trend::Decreasing)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moisture_history(values: &[f64]) -> Vec<SensorReading> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| SensorReading {
                timestamp: Some(1000.0 + i as f64 * 5.0),
                soil_moisture: Some(*v),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn summary_matches_sample_statistics() {
        let history = moisture_history(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let summary = summarize(SensorField::SoilMoisture, &history).unwrap();

        assert_eq!(summary.count, 8);
        assert_eq!(summary.mean, 5.0);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 9.0);
        let std_dev = summary.std_dev.unwrap();
        assert!((std_dev - (32.0f64 / 7.0).sqrt()).abs() < 1e-9);
        assert_eq!(summary.trend, None);
    }

    #[test]
    fn missing_values_are_skipped() {
        let mut history = moisture_history(&[10.0, 20.0]);
        history.push(SensorReading {
            timestamp: Some(2000.0),
            ..Default::default()
        });
        let summary = summarize(SensorField::SoilMoisture, &history).unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.mean, 15.0);

        assert!(summarize(SensorField::SoilPh, &history).is_none());
    }

    #[test]
    fn single_value_has_no_spread() {
        let summary = summarize(SensorField::SoilMoisture, &moisture_history(&[42.0])).unwrap();
        assert_eq!(summary.std_dev, None);
        assert_eq!(summary.min, summary.max);
    }

    #[test]
    fn trend_uses_the_last_ten_readings() {
        let rising: Vec<f64> = (0..10).map(|i| 30.0 + i as f64).collect();
        let summary = summarize(SensorField::SoilMoisture, &moisture_history(&rising)).unwrap();
        assert_eq!(summary.trend, Some(Trend::Increasing));

        let falling: Vec<f64> = (0..12).map(|i| 60.0 - 2.0 * i as f64).collect();
        let summary = summarize(SensorField::SoilMoisture, &moisture_history(&falling)).unwrap();
        assert_eq!(summary.trend, Some(Trend::Decreasing));

        let drifting: Vec<f64> = (0..10).map(|i| 50.0 + 0.1 * i as f64).collect();
        let summary = summarize(SensorField::SoilMoisture, &moisture_history(&drifting)).unwrap();
        assert_eq!(summary.trend, Some(Trend::Steady));

        // A steep drop before the window does not count.
        let mut history = vec![100.0, 0.0];
        history.extend(std::iter::repeat_n(50.0, 10));
        let summary = summarize(SensorField::SoilMoisture, &moisture_history(&history)).unwrap();
        assert_eq!(summary.trend, Some(Trend::Steady));
    }

    #[test]
    fn short_history_has_no_trend() {
        let values: Vec<f64> = (0..9).map(|i| i as f64 * 10.0).collect();
        let summary = summarize(SensorField::SoilMoisture, &moisture_history(&values)).unwrap();
        assert_eq!(summary.trend, None);
    }

    #[test]
    fn panel_lists_only_fields_with_values() {
        let values: Vec<f64> = (0..10).map(|i| 30.0 + 2.0 * i as f64).collect();
        let mut panel = InsightPanel::new();
        panel.update(&moisture_history(&values));

        assert_eq!(panel.readings(), 10);
        assert_eq!(panel.summaries().len(), 1);
        assert_eq!(panel.summaries()[0].field, SensorField::SoilMoisture);
        assert_eq!(panel.moving().count(), 1);
    }
}
