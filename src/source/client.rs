//! Sensor Data Client
//!
//! HTTP client for the `/data` endpoint of the sensor data server.

use crate::consts::cli_consts::polling;
use crate::readings::{SensorReading, parse_history};
use crate::source::DataSource;
use crate::source::error::SourceError;
use reqwest::{Client, ClientBuilder, Response};

// User-Agent string with the dashboard version
const USER_AGENT: &str = concat!("agri-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct SensorDataClient {
    client: Client,
    base_url: String,
}

impl SensorDataClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, SourceError> {
        let client = ClientBuilder::new()
            .connect_timeout(polling::request_timeout())
            .timeout(polling::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, SourceError> {
        if !response.status().is_success() {
            return Err(SourceError::from_response(response).await);
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl DataSource for SensorDataClient {
    fn endpoint(&self) -> String {
        self.build_url(polling::DATA_ENDPOINT)
    }

    async fn fetch_readings(&self) -> Result<Vec<SensorReading>, SourceError> {
        let response = self.client.get(self.endpoint()).send().await?;
        let response = Self::handle_response_status(response).await?;
        let body = response.bytes().await?;
        Ok(parse_history(&body)?)
    }
}
