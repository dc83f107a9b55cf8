//! Main event loop: draw, drain async completions, poll input
//!
//! Network tasks run on the tokio worker threads and report back through the
//! message channel; the loop itself stays synchronous and redraws at the
//! input-poll cadence (50 ms).

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use parceltrack_api::ApiClient;
use parceltrack_app::{process_message, AppState, Message, Settings};
use parceltrack_core::prelude::*;

use crate::{event, render, terminal};

/// Capacity of the completion-message channel. Far more than the handful of
/// in-flight requests a single user can trigger.
const CHANNEL_CAPACITY: usize = 256;

/// Run the TUI until the user quits.
pub async fn run(settings: Settings) -> Result<()> {
    let api = Arc::new(ApiClient::new(
        &settings.api.base_url,
        Duration::from_millis(settings.api.timeout_ms),
    )?);

    terminal::install_panic_hook();
    let mut terminal = ratatui::try_init().map_err(|e| Error::terminal(e.to_string()))?;

    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);
    let mut state = AppState::new(&settings);

    info!("UI ready, backend {}", settings.api.base_url);
    let result = run_loop(&mut terminal, &mut state, &api, &msg_tx, &mut msg_rx);
    ratatui::restore();
    info!("UI shut down");
    result
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    api: &Arc<ApiClient>,
    msg_tx: &mpsc::Sender<Message>,
    msg_rx: &mut mpsc::Receiver<Message>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render::view(frame, state))?;

        // Drain completed background work first so a burst of responses is
        // applied in one frame.
        while let Ok(message) = msg_rx.try_recv() {
            process_message(state, message, api, msg_tx);
        }
        if state.should_quit {
            return Ok(());
        }

        if let Some(message) = event::poll()? {
            process_message(state, message, api, msg_tx);
        }
        if state.should_quit {
            return Ok(());
        }
    }
}
