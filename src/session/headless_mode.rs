//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::board::CardPanel;
use crate::poller::PollMessage;

/// One line per card: `title=value` pairs, missing values shown as `-`.
pub fn card_summary(panel: &CardPanel) -> String {
    panel
        .cards()
        .iter()
        .map(|card| {
            let value = if card.value.is_empty() { "-" } else { &card.value };
            format!("{}={}", card.title, value)
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Runs the application in headless mode
///
/// Prints poller events and the latest values to stdout until Ctrl+C.
pub async fn run_headless_mode(mut session: SessionData) {
    print_session_starting("headless", &session.base_url);

    // Trigger shutdown on Ctrl+C
    let shutdown = session.poll_handle.cancellation_token();
    let ctrl_c_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_token.cancel();
        }
    });

    let mut cards = CardPanel::new();
    loop {
        tokio::select! {
            message = session.message_receiver.recv() => match message {
                Some(PollMessage::Readings(readings)) => {
                    if let Some(latest) = readings.last() {
                        cards.update(latest);
                        println!("{}", card_summary(&cards));
                    }
                }
                Some(PollMessage::Activity(event)) => {
                    if event.should_display() {
                        println!("{}", event);
                    }
                }
                None => break,
            },
            _ = shutdown.cancelled() => break,
        }
    }

    print_session_shutdown();
    session.poll_handle.shutdown().await;
    print_session_exit_success();
}
