//! Page layout: named mount regions for charts and the card panel.

use ratatui::layout::{Constraint, Layout, Rect};
use std::collections::HashMap;

/// Mount identifier of the latest-values card panel.
pub const CARD_PANEL_MOUNT: &str = "latest-data";

/// Height of the card strip, two rows of cards.
const CARD_STRIP_HEIGHT: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountKind {
    Chart,
    Cards,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountPoint {
    pub id: &'static str,
    pub kind: MountKind,
}

/// The set of regions widgets can be bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    mounts: Vec<MountPoint>,
}

impl PageLayout {
    pub fn new(mounts: Vec<MountPoint>) -> Self {
        Self { mounts }
    }

    /// Card panel on top, the four charts in a two-column grid below.
    pub fn standard() -> Self {
        let chart = |id| MountPoint {
            id,
            kind: MountKind::Chart,
        };
        Self::new(vec![
            MountPoint {
                id: CARD_PANEL_MOUNT,
                kind: MountKind::Cards,
            },
            chart("temp-humidity-chart"),
            chart("soil-nutrients-chart"),
            chart("soil-moisture-chart"),
            chart("soil-ph-chart"),
        ])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.mounts.iter().any(|m| m.id == id)
    }

    #[cfg(test)]
    pub fn mounts(&self) -> &[MountPoint] {
        &self.mounts
    }

    /// Split `area` into one rectangle per mount.
    pub fn regions(&self, area: Rect) -> HashMap<&'static str, Rect> {
        let mut regions = HashMap::new();
        let cards: Vec<&MountPoint> = self
            .mounts
            .iter()
            .filter(|m| m.kind == MountKind::Cards)
            .collect();
        let charts: Vec<&MountPoint> = self
            .mounts
            .iter()
            .filter(|m| m.kind == MountKind::Chart)
            .collect();

        let chart_area = if cards.is_empty() {
            area
        } else {
            let rows = Layout::vertical([
                Constraint::Length(CARD_STRIP_HEIGHT * cards.len() as u16),
                Constraint::Fill(1),
            ])
            .split(area);
            let strips = Layout::vertical(vec![Constraint::Fill(1); cards.len()]).split(rows[0]);
            for (mount, strip) in cards.iter().zip(strips.iter()) {
                regions.insert(mount.id, *strip);
            }
            rows[1]
        };

        if charts.is_empty() {
            return regions;
        }
        let row_count = charts.len().div_ceil(2);
        let rows = Layout::vertical(vec![Constraint::Fill(1); row_count]).split(chart_area);
        for (row, pair) in rows.iter().zip(charts.chunks(2)) {
            let cols = Layout::horizontal(vec![Constraint::Fill(1); pair.len()]).split(*row);
            for (mount, col) in pair.iter().zip(cols.iter()) {
                regions.insert(mount.id, *col);
            }
        }
        regions
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_has_all_mounts() {
        let page = PageLayout::standard();
        for id in [
            "latest-data",
            "temp-humidity-chart",
            "soil-nutrients-chart",
            "soil-moisture-chart",
            "soil-ph-chart",
        ] {
            assert!(page.contains(id), "missing {}", id);
        }
        assert!(!page.contains("unknown-chart"));
    }

    #[test]
    fn regions_cover_every_mount_without_overlap() {
        let page = PageLayout::standard();
        let regions = page.regions(Rect::new(0, 0, 120, 48));
        assert_eq!(regions.len(), 5);

        let cards = regions["latest-data"];
        assert_eq!(cards.y, 0);
        assert_eq!(cards.height, CARD_STRIP_HEIGHT);

        let rects: Vec<Rect> = regions.values().copied().collect();
        for (i, a) in rects.iter().enumerate() {
            for b in rects.iter().skip(i + 1) {
                assert!(!a.intersects(*b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn odd_chart_count_gets_a_full_width_last_row() {
        let page = PageLayout::new(vec![
            MountPoint {
                id: "a",
                kind: MountKind::Chart,
            },
            MountPoint {
                id: "b",
                kind: MountKind::Chart,
            },
            MountPoint {
                id: "c",
                kind: MountKind::Chart,
            },
        ]);
        let regions = page.regions(Rect::new(0, 0, 100, 40));
        assert_eq!(regions["c"].width, 100);
        assert_eq!(regions["a"].width + regions["b"].width, 100);
    }
}
