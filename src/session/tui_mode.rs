//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
    setup_session,
};
use crate::poller::PollHandle;
use crate::ui::{self, UIConfig, dashboard::DashboardState};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    error::Error,
    io::{self, Stdout},
};

type DashboardTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode, alternate screen and mouse capture. Raw mode is undone if the
/// rest of the setup fails.
fn setup_terminal() -> io::Result<DashboardTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e);
    }
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut DashboardTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()
}

/// Runs `setup` with the poller already started. On failure the poller is
/// shut down before the error is returned.
async fn setup_or_stop_poller<T>(
    poll_handle: PollHandle,
    setup: impl FnOnce() -> io::Result<T>,
) -> io::Result<(T, PollHandle)> {
    match setup() {
        Ok(value) => Ok((value, poll_handle)),
        Err(e) => {
            poll_handle.shutdown().await;
            Err(e)
        }
    }
}

/// Runs the application in TUI mode
///
/// Charts are mounted before the poller starts, so a broken page layout
/// fails without issuing any request.
pub async fn run_tui_mode(base_url: String, with_background: bool) -> Result<(), Box<dyn Error>> {
    print_session_starting("TUI", &base_url);

    let state = DashboardState::new(base_url.clone(), UIConfig::new(with_background))?;
    let SessionData {
        message_receiver,
        poll_handle,
        ..
    } = setup_session(base_url)?;

    let (mut terminal, poll_handle) = setup_or_stop_poller(poll_handle, setup_terminal).await?;

    let app = ui::App::new(state, message_receiver, poll_handle.cancellation_token());
    let result = ui::run(&mut terminal, app).await;
    let restored = restore_terminal(&mut terminal);

    print_session_shutdown();
    poll_handle.shutdown().await;
    result?;
    restored?;
    print_session_exit_success();

    Ok(())
}
