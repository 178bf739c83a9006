//! Latest-value card panel.

use crate::readings::{SensorField, SensorReading};

/// Where a value sits relative to the crop's optimal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum CardStatus {
    Low,
    Optimal,
    High,
    /// No value, or no known range for the field.
    Unknown,
}

impl CardStatus {
    pub fn classify(field: SensorField, value: Option<f64>) -> Self {
        match (value, field.optimal_range()) {
            (Some(v), Some((min, _))) if v < min => CardStatus::Low,
            (Some(v), Some((_, max))) if v > max => CardStatus::High,
            (Some(_), Some(_)) => CardStatus::Optimal,
            _ => CardStatus::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub field: SensorField,
    pub title: String,
    pub value: String,
    pub status: CardStatus,
}

/// Raw number, shortest form that round-trips (`42`, `6.5`). Missing is empty.
pub fn format_value(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardPanel {
    cards: Vec<Card>,
}

impl CardPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous cards and rebuild one per field from `latest`.
    pub fn update(&mut self, latest: &SensorReading) {
        self.cards.clear();
        for field in SensorField::card_order() {
            let value = field.value(latest);
            self.cards.push(Card {
                field,
                title: field.title(),
                value: format_value(value),
                status: CardStatus::classify(field, value),
            });
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards whose value falls outside the optimal range.
    pub fn out_of_range(&self) -> usize {
        self.cards
            .iter()
            .filter(|c| matches!(c.status, CardStatus::Low | CardStatus::High))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_numbers_without_rounding_or_units() {
        assert_eq!(format_value(Some(42.0)), "42");
        assert_eq!(format_value(Some(6.5)), "6.5");
        assert_eq!(format_value(Some(0.1 + 0.2)), "0.30000000000000004");
        assert_eq!(format_value(Some(-3.25)), "-3.25");
        assert_eq!(format_value(None), "");
    }

    #[test]
    fn update_builds_nine_cards_even_when_fields_are_missing() {
        let mut panel = CardPanel::new();
        panel.update(&SensorReading {
            soil_moisture: Some(42.0),
            ..Default::default()
        });

        assert_eq!(panel.cards().len(), 9);
        assert_eq!(panel.cards()[0].title, "soil moisture");
        assert_eq!(panel.cards()[0].value, "42");
        assert!(panel.cards()[1..].iter().all(|c| c.value.is_empty()));
    }

    #[test]
    fn update_replaces_previous_cards() {
        let mut panel = CardPanel::new();
        panel.update(&SensorReading {
            soil_ph: Some(5.0),
            ..Default::default()
        });
        panel.update(&SensorReading {
            soil_ph: Some(6.5),
            ..Default::default()
        });

        assert_eq!(panel.cards().len(), 9);
        let ph = panel
            .cards()
            .iter()
            .find(|c| c.field == SensorField::SoilPh)
            .unwrap();
        assert_eq!(ph.value, "6.5");
        assert_eq!(ph.status, CardStatus::Optimal);
    }

    #[test]
    fn classifies_against_optimal_ranges() {
        use SensorField::*;
        assert_eq!(CardStatus::classify(SoilMoisture, Some(10.0)), CardStatus::Low);
        assert_eq!(CardStatus::classify(SoilMoisture, Some(30.0)), CardStatus::Optimal);
        assert_eq!(CardStatus::classify(SoilMoisture, Some(71.0)), CardStatus::High);
        assert_eq!(CardStatus::classify(SoilMoisture, None), CardStatus::Unknown);
        assert_eq!(CardStatus::classify(SoilHumidity, Some(55.0)), CardStatus::Unknown);
    }

    #[test]
    fn counts_out_of_range_cards() {
        let mut panel = CardPanel::new();
        panel.update(&SensorReading {
            soil_moisture: Some(10.0),
            soil_ph: Some(9.0),
            air_humidity: Some(60.0),
            ..Default::default()
        });
        assert_eq!(panel.out_of_range(), 2);
    }
}
