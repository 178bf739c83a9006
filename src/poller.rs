//! Poll loop for the sensor data endpoint
//!
//! A single background task fetches the full history on a fixed interval and
//! hands the result to the UI over a channel. The task never touches widgets;
//! whoever owns the receiving end applies the readings. Failures are reported
//! as activity events and the next tick proceeds unconditionally.

use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::readings::SensorReading;
use crate::source::DataSource;
use crate::source::error::SourceError;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Error)]
pub enum PollError {
    /// Transport failure, non-2xx status or malformed body.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The server answered with an empty array.
    #[error("Empty payload: the server has no readings yet")]
    EmptyPayload,
}

/// What the poller sends to the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum PollMessage {
    /// A non-empty history, oldest first.
    Readings(Vec<SensorReading>),
    /// Something worth showing in the activity log.
    Activity(Event),
}

/// Fetch once and reject empty histories.
pub async fn poll_once(source: &dyn DataSource) -> Result<Vec<SensorReading>, PollError> {
    let readings = source.fetch_readings().await?;
    if readings.is_empty() {
        return Err(PollError::EmptyPayload);
    }
    Ok(readings)
}

/// Event sending utilities for the poller
#[derive(Clone)]
pub struct PollSender {
    sender: mpsc::Sender<PollMessage>,
}

impl PollSender {
    pub fn new(sender: mpsc::Sender<PollMessage>) -> Self {
        Self { sender }
    }

    /// Returns false once the receiving side is gone.
    pub async fn send_readings(&self, readings: Vec<SensorReading>) -> bool {
        self.sender
            .send(PollMessage::Readings(readings))
            .await
            .is_ok()
    }

    pub async fn send_poll_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> bool {
        let event = Event::poller_with_level(message, event_type, log_level);
        event.emit();
        self.sender
            .send(PollMessage::Activity(event))
            .await
            .is_ok()
    }
}

/// Handle to a running poller. Dropping it does not stop the task; call
/// [`PollHandle::cancel`] or [`PollHandle::shutdown`].
#[derive(Debug)]
pub struct PollHandle {
    token: CancellationToken,
    join: JoinHandle<()>,
}

impl PollHandle {
    /// Ask the poller to stop after the current step.
    #[cfg(test)]
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// A clone of the token, for wiring into other shutdown paths.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Cancel and wait for the task to exit.
    pub async fn shutdown(self) {
        self.token.cancel();
        let _ = self.join.await;
    }
}

/// Start polling `source` every `period`, first poll immediately.
pub fn spawn_poller(
    source: Box<dyn DataSource>,
    sender: mpsc::Sender<PollMessage>,
    period: Duration,
) -> PollHandle {
    let token = CancellationToken::new();
    let join = tokio::spawn(poll_loop(
        source,
        PollSender::new(sender),
        token.clone(),
        period,
    ));
    PollHandle { token, join }
}

/// Runs until `token` is cancelled or the receiver is dropped.
pub async fn poll_loop(
    source: Box<dyn DataSource>,
    sender: PollSender,
    token: CancellationToken,
    period: Duration,
) {
    let classifier = ErrorClassifier::new();
    let mut ticker = interval(period);
    // A slow poll pushes the schedule back instead of firing a burst.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = ticker.tick() => {
                let delivered = tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    delivered = run_poll(source.as_ref(), &sender, &classifier) => delivered,
                };
                if !delivered {
                    break;
                }
            }
        }
    }
}

async fn run_poll(
    source: &dyn DataSource,
    sender: &PollSender,
    classifier: &ErrorClassifier,
) -> bool {
    match poll_once(source).await {
        Ok(readings) => {
            let count = readings.len();
            sender.send_readings(readings).await
                && sender
                    .send_poll_event(
                        format!("Received {} readings from {}", count, source.endpoint()),
                        EventType::Success,
                        LogLevel::Debug,
                    )
                    .await
        }
        Err(e) => {
            let log_level = classifier.classify_poll_error(&e);
            sender
                .send_poll_event(format!("Poll failed: {}", e), EventType::Error, log_level)
                .await
        }
    }
}
