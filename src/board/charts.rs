//! Chart declarations and the widget contract.

use crate::readings::SensorField;
use ratatui::style::Color;
use ratatui::widgets::GraphType;
use strum::{EnumIter, IntoEnumIterator};

/// The four charts of the dashboard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum ChartId {
    TempHumidity,
    SoilNutrients,
    SoilMoisture,
    SoilPh,
}

impl ChartId {
    /// Identifier of the page region the chart is mounted on.
    pub fn mount_id(self) -> &'static str {
        match self {
            ChartId::TempHumidity => "temp-humidity-chart",
            ChartId::SoilNutrients => "soil-nutrients-chart",
            ChartId::SoilMoisture => "soil-moisture-chart",
            ChartId::SoilPh => "soil-ph-chart",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartId::TempHumidity => "Temperature & Humidity",
            ChartId::SoilNutrients => "Soil Nutrients",
            ChartId::SoilMoisture => "Soil Moisture",
            ChartId::SoilPh => "Soil pH",
        }
    }
}

/// One line on a chart. The field binding is explicit; the label is display text only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesSpec {
    pub label: &'static str,
    pub color: Color,
    pub field: SensorField,
}

impl SeriesSpec {
    pub const fn new(label: &'static str, color: Color, field: SensorField) -> Self {
        Self {
            label,
            color,
            field,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartConfig {
    pub id: ChartId,
    /// Line charts only; datasets are drawn without area fill.
    pub graph_type: GraphType,
    pub series: Vec<SeriesSpec>,
}

impl ChartConfig {
    pub fn line(id: ChartId, series: Vec<SeriesSpec>) -> Self {
        Self {
            id,
            graph_type: GraphType::Line,
            series,
        }
    }
}

// Named CSS colors.
const CRIMSON: Color = Color::Rgb(220, 20, 60);
const SKY_BLUE: Color = Color::Rgb(135, 206, 235);
const RED: Color = Color::Rgb(255, 0, 0);
const PURPLE: Color = Color::Rgb(128, 0, 128);
const GREEN: Color = Color::Rgb(0, 128, 0);
const ORANGE: Color = Color::Rgb(255, 165, 0);
const BROWN: Color = Color::Rgb(165, 42, 42);
const BLUE: Color = Color::Rgb(0, 0, 255);
const DARK_GREEN: Color = Color::Rgb(0, 100, 0);

/// Declared series for a chart.
pub fn series_for(id: ChartId) -> Vec<SeriesSpec> {
    use SensorField::*;
    match id {
        ChartId::TempHumidity => vec![
            SeriesSpec::new("Air Temperature (°C)", CRIMSON, AirTemperature),
            SeriesSpec::new("Air Humidity (%)", SKY_BLUE, AirHumidity),
            SeriesSpec::new("Soil Temperature (°C)", RED, SoilTemperature),
            SeriesSpec::new("Soil Humidity (%)", PURPLE, SoilHumidity),
        ],
        ChartId::SoilNutrients => vec![
            SeriesSpec::new("Nitrogen (mg/kg)", GREEN, SoilNitrogen),
            SeriesSpec::new("Phosphorus (mg/kg)", ORANGE, SoilPhosphorus),
            SeriesSpec::new("Potassium (mg/kg)", BROWN, SoilPotassium),
        ],
        ChartId::SoilMoisture => vec![SeriesSpec::new("Soil Moisture (%)", BLUE, SoilMoisture)],
        ChartId::SoilPh => vec![SeriesSpec::new("Soil pH", DARK_GREEN, SoilPh)],
    }
}

/// Configuration of every chart on the dashboard.
pub fn chart_configs() -> Vec<ChartConfig> {
    ChartId::iter()
        .map(|id| ChartConfig::line(id, series_for(id)))
        .collect()
}

/// Values of one series, one entry per label. `None` is a gap.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesData {
    pub spec: SeriesSpec,
    pub values: Vec<Option<f64>>,
}

/// Mutable state of a chart: x-axis labels and per-series values.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<SeriesData>,
}

impl ChartData {
    /// Empty labels and one empty value sequence per declared series.
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            labels: Vec::new(),
            series: config
                .series
                .iter()
                .map(|spec| SeriesData {
                    spec: *spec,
                    values: Vec::new(),
                })
                .collect(),
        }
    }

    /// Every series has exactly one value per label.
    pub fn is_consistent(&self) -> bool {
        self.series
            .iter()
            .all(|series| series.values.len() == self.labels.len())
    }
}

/// A chart surface the dashboard writes into.
///
/// Implementations own their [`ChartData`]; the dashboard replaces it in
/// place and then calls [`ChartWidget::redraw`].
pub trait ChartWidget {
    fn config(&self) -> &ChartConfig;
    fn data(&self) -> &ChartData;
    fn data_mut(&mut self) -> &mut ChartData;
    fn redraw(&mut self);
}
