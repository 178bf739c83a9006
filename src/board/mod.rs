//! Dashboard model
//!
//! Chart widgets, the card panel and the page they are mounted on, kept free
//! of terminal I/O so the update logic can run against fake widgets.

pub mod cards;
pub mod charts;
pub mod insights;
pub mod page;
pub mod registry;

pub use cards::{Card, CardPanel, CardStatus};
pub use charts::{ChartConfig, ChartData, ChartId, ChartWidget, chart_configs};
pub use insights::{FieldSummary, InsightPanel, Trend};
pub use page::{CARD_PANEL_MOUNT, PageLayout};
pub use registry::{ChartRegistry, DashboardError};

use crate::readings::SensorReading;

/// Charts, cards and history summaries, updated together from each poll.
#[derive(Debug)]
pub struct Board<W> {
    pub registry: ChartRegistry<W>,
    pub cards: CardPanel,
    pub insights: InsightPanel,
}

impl<W: ChartWidget> Board<W> {
    /// Create every declared chart on `page` and an empty card panel.
    pub fn initialize<F>(page: &PageLayout, build: F) -> Result<Self, DashboardError>
    where
        F: FnMut(ChartConfig) -> W,
    {
        if !page.contains(CARD_PANEL_MOUNT) {
            return Err(DashboardError::MissingMount(CARD_PANEL_MOUNT.to_string()));
        }
        let registry = ChartRegistry::initialize(chart_configs(), page, build)?;
        Ok(Self {
            registry,
            cards: CardPanel::new(),
            insights: InsightPanel::new(),
        })
    }

    /// Apply one poll's history. Returns false, changing nothing, when empty.
    pub fn apply_history(&mut self, history: &[SensorReading]) -> bool {
        let Some(latest) = history.last() else {
            return false;
        };
        self.cards.update(latest);
        self.insights.update(history);
        self.registry.update_charts(history)
    }
}
