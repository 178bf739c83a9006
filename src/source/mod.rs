use crate::readings::SensorReading;
use crate::source::error::SourceError;

pub(crate) mod client;
pub use client::SensorDataClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// Anything that can produce the full reading history on demand.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    /// URL the readings are fetched from, for display.
    fn endpoint(&self) -> String;

    /// Fetch the complete history. Every call returns the whole array.
    async fn fetch_readings(&self) -> Result<Vec<SensorReading>, SourceError>;
}
