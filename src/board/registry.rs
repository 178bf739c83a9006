//! Owned collection of chart widgets keyed by chart identifier.

use super::charts::{ChartConfig, ChartId, ChartWidget};
use super::page::PageLayout;
use crate::readings::SensorReading;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DashboardError {
    /// No region with this identifier exists on the page.
    #[error("Mount point not found: {0}")]
    MissingMount(String),

    /// Two configurations share one identifier.
    #[error("Chart declared twice: {0}")]
    DuplicateChart(String),
}

#[derive(Debug)]
pub struct ChartRegistry<W> {
    widgets: BTreeMap<ChartId, W>,
}

impl<W: ChartWidget> ChartRegistry<W> {
    /// Build one widget per configuration, each bound to its page region.
    ///
    /// Fails on the first configuration whose region is missing or whose
    /// identifier was already used.
    pub fn initialize<F>(
        configs: Vec<ChartConfig>,
        page: &PageLayout,
        mut build: F,
    ) -> Result<Self, DashboardError>
    where
        F: FnMut(ChartConfig) -> W,
    {
        let mut widgets = BTreeMap::new();
        for config in configs {
            let id = config.id;
            if !page.contains(id.mount_id()) {
                return Err(DashboardError::MissingMount(id.mount_id().to_string()));
            }
            if widgets.contains_key(&id) {
                return Err(DashboardError::DuplicateChart(id.mount_id().to_string()));
            }
            widgets.insert(id, build(config));
        }
        Ok(Self { widgets })
    }

    #[cfg(test)]
    pub fn get(&self, id: ChartId) -> Option<&W> {
        self.widgets.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ChartId, &W)> {
        self.widgets.iter()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Replace labels and series values of every chart from `history`, then
    /// redraw each one. An empty history leaves every chart untouched.
    pub fn update_charts(&mut self, history: &[SensorReading]) -> bool {
        if history.is_empty() {
            return false;
        }
        let labels: Vec<String> = history.iter().map(SensorReading::time_label).collect();

        for widget in self.widgets.values_mut() {
            let data = widget.data_mut();
            data.labels = labels.clone();
            for series in &mut data.series {
                let field = series.spec.field;
                series.values = history.iter().map(|r| field.value(r)).collect();
            }
            debug_assert!(data.is_consistent());
            widget.redraw();
        }
        true
    }
}
