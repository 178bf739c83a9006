//! Sensor readings as served by the data endpoint.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// One sample from the field sensor.
///
/// Every value is optional: the ingest side stores `null` for anything the
/// device did not report, and older records may miss keys entirely. Keys not
/// listed here (`mac_address`, `crop_number`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorReading {
    /// Epoch seconds, possibly fractional.
    pub timestamp: Option<f64>,
    pub soil_moisture: Option<f64>,
    pub soil_nitrogen: Option<f64>,
    pub soil_phosphorus: Option<f64>,
    pub soil_potassium: Option<f64>,
    pub soil_temperature: Option<f64>,
    pub soil_humidity: Option<f64>,
    pub soil_ph: Option<f64>,
    pub air_temperature: Option<f64>,
    pub air_humidity: Option<f64>,
}

impl SensorReading {
    /// Local wall-clock time of the reading, `HH:MM:SS`. Empty when the
    /// timestamp is missing or out of range.
    pub fn time_label(&self) -> String {
        self.timestamp
            .and_then(local_time)
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_default()
    }
}

fn local_time(epoch_secs: f64) -> Option<DateTime<Local>> {
    if !epoch_secs.is_finite() {
        return None;
    }
    let secs = epoch_secs.floor();
    let nanos = ((epoch_secs - secs) * 1e9) as u32;
    DateTime::from_timestamp(secs as i64, nanos.min(999_999_999)).map(|t| t.with_timezone(&Local))
}

/// The numeric fields of a [`SensorReading`], in card display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum SensorField {
    SoilMoisture,
    SoilNitrogen,
    SoilPhosphorus,
    SoilPotassium,
    SoilTemperature,
    SoilHumidity,
    SoilPh,
    AirTemperature,
    AirHumidity,
}

impl SensorField {
    /// Field selector used by charts and cards.
    pub fn value(self, reading: &SensorReading) -> Option<f64> {
        match self {
            SensorField::SoilMoisture => reading.soil_moisture,
            SensorField::SoilNitrogen => reading.soil_nitrogen,
            SensorField::SoilPhosphorus => reading.soil_phosphorus,
            SensorField::SoilPotassium => reading.soil_potassium,
            SensorField::SoilTemperature => reading.soil_temperature,
            SensorField::SoilHumidity => reading.soil_humidity,
            SensorField::SoilPh => reading.soil_ph,
            SensorField::AirTemperature => reading.air_temperature,
            SensorField::AirHumidity => reading.air_humidity,
        }
    }

    /// JSON key, e.g. `soil_moisture`.
    pub fn key(self) -> String {
        self.to_string()
    }

    /// Human title: the key with underscores rendered as spaces.
    pub fn title(self) -> String {
        self.key().replace('_', " ")
    }

    /// Range considered healthy for the crop, if one is known.
    pub fn optimal_range(self) -> Option<(f64, f64)> {
        match self {
            SensorField::SoilMoisture => Some((30.0, 70.0)),
            SensorField::SoilNitrogen => Some((5.0, 15.0)),
            SensorField::SoilPhosphorus => Some((5.0, 15.0)),
            SensorField::SoilPotassium => Some((15.0, 30.0)),
            SensorField::SoilTemperature => Some((20.0, 30.0)),
            SensorField::SoilHumidity => None,
            SensorField::SoilPh => Some((6.0, 7.5)),
            SensorField::AirTemperature => Some((20.0, 35.0)),
            SensorField::AirHumidity => Some((50.0, 85.0)),
        }
    }

    /// All fields in card order.
    pub fn card_order() -> impl Iterator<Item = SensorField> {
        SensorField::iter()
    }
}

/// Parse a `/data` response body.
pub fn parse_history(body: &[u8]) -> Result<Vec<SensorReading>, serde_json::Error> {
    serde_json::from_slice(body)
}
