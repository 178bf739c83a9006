//! Dashboard state update logic
//!
//! Applies queued poller messages to the board and the poll counters

use super::state::DashboardState;

use crate::events::EventType;
use crate::poller::PollMessage;
use crate::readings::SensorReading;

impl DashboardState {
    /// Advance the animation tick and apply everything the poller sent.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(message) = self.pending_messages.pop_front() {
            self.process_message(message);
        }
    }

    fn process_message(&mut self, message: PollMessage) {
        match message {
            PollMessage::Readings(readings) => {
                self.apply_readings(&readings);
            }
            PollMessage::Activity(event) => {
                if event.event_type == EventType::Error {
                    self.stats.record_failure();
                }
                self.add_to_activity_log(event);
            }
        }
    }

    /// Update cards and every chart from one poll's history.
    ///
    /// An empty history is ignored and leaves the screen as it was.
    pub fn apply_readings(&mut self, readings: &[SensorReading]) -> bool {
        if !self.board.apply_history(readings) {
            return false;
        }
        self.stats.record_success(readings.len());
        true
    }
}
