//! Session setup and initialization

use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, polling};
use crate::poller::{PollHandle, PollMessage, spawn_poller};
use crate::source::SensorDataClient;
use std::error::Error;
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Readings and activity from the poller
    pub message_receiver: mpsc::Receiver<PollMessage>,
    /// Running poll task
    pub poll_handle: PollHandle,
    /// Base URL of the data server
    pub base_url: String,
}

/// Builds the HTTP client and starts polling `base_url`.
///
/// The first poll is issued immediately; later ones every poll interval
/// until the returned handle is cancelled.
pub fn setup_session(base_url: String) -> Result<SessionData, Box<dyn Error>> {
    let client = SensorDataClient::new(base_url.clone())?;
    let (sender, message_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    let poll_handle = spawn_poller(Box::new(client), sender, polling::poll_interval());

    Ok(SessionData {
        message_receiver,
        poll_handle,
        base_url,
    })
}
