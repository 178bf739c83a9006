//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui;
use crate::events::{Event as DashboardEvent, EventType};
use crate::poller::PollMessage;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Terminal, backend::Backend};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// UI configuration data grouped by concern
#[derive(Debug, Clone, Default)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// Dashboard with every chart already mounted.
    state: DashboardState,

    /// Receives readings and activity from the poller.
    message_receiver: mpsc::Receiver<PollMessage>,

    /// Cancelled when the user quits; stops the poller too.
    shutdown: CancellationToken,
}

impl App {
    pub fn new(
        mut state: DashboardState,
        message_receiver: mpsc::Receiver<PollMessage>,
        shutdown: CancellationToken,
    ) -> Self {
        let ready = DashboardEvent::dashboard(
            format!(
                "Dashboard ready: {} charts mounted, polling {}",
                state.board.registry.len(),
                state.base_url
            ),
            EventType::Refresh,
        );
        ready.emit();
        state.add_to_activity_log(ready);
        Self {
            state,
            message_receiver,
            shutdown,
        }
    }

    /// Move everything the poller sent into the dashboard and apply it.
    pub fn drain_messages(&mut self) {
        while let Ok(message) = self.message_receiver.try_recv() {
            self.state.add_message(message);
        }
        self.state.update();
    }
}

/// Runs the dashboard until the user quits or `shutdown` is cancelled elsewhere.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        if app.shutdown.is_cancelled() {
            return Ok(());
        }

        app.drain_messages();
        terminal.draw(|f| render_dashboard(f, &app.state))?;

        // Poll for key events
        if event::poll(ui::input_poll())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    app.shutdown.cancel();
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readings::SensorReading;

    fn app() -> (App, mpsc::Sender<PollMessage>) {
        let state =
            DashboardState::new("http://localhost:5000".to_string(), UIConfig::default()).unwrap();
        let (sender, receiver) = mpsc::channel(8);
        (App::new(state, receiver, CancellationToken::new()), sender)
    }

    #[tokio::test]
    async fn drains_poller_messages_into_the_board() {
        let (mut app, sender) = app();
        let reading = SensorReading {
            timestamp: Some(1_700_000_000.0),
            soil_moisture: Some(42.0),
            ..Default::default()
        };
        sender
            .send(PollMessage::Readings(vec![reading]))
            .await
            .unwrap();

        app.drain_messages();

        assert_eq!(app.state.board.cards.cards()[0].value, "42");
        assert_eq!(app.state.stats.successes, 1);
    }

    #[test]
    fn startup_event_is_logged() {
        let (app, _sender) = app();
        let first = app.state.activity_logs.front().unwrap();
        assert!(first.msg.contains("4 charts mounted"));
    }

    #[tokio::test]
    async fn run_returns_once_shutdown_is_cancelled() {
        let (app, _sender) = app();
        app.shutdown.cancel();
        let mut terminal = Terminal::new(ratatui::backend::TestBackend::new(80, 24)).unwrap();
        assert!(run(&mut terminal, app).await.is_ok());
    }
}
