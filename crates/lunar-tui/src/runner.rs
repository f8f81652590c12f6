//! Event loop: drain backend results, draw, then wait for input

use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use lunar_api::Backend;
use lunar_app::config::Settings;
use lunar_app::process::process_message;
use lunar_app::{AppState, Message, Route};
use lunar_core::prelude::*;

use crate::event::{self, TickClock};
use crate::{render, terminal};

/// Run the console until the user quits.
///
/// `api_key`, when present, is used to log in straight away; a successful
/// login lands on `route`.
pub async fn run<B>(settings: Settings, backend: B, route: Route, api_key: Option<String>) -> Result<()>
where
    B: Backend + Clone + Sync + 'static,
{
    terminal::install_panic_hook();
    let tick_rate = Duration::from_millis(settings.ui.tick_rate_ms);
    info!("Starting console at {} (tick {:?})", route, tick_rate);

    let mut term = ratatui::init();
    let mut state = AppState::new(settings);
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    process_message(
        &mut state,
        Message::Startup { route, api_key },
        &backend,
        &msg_tx,
    );

    let result = run_loop(&mut term, &mut state, msg_rx, &backend, &msg_tx, tick_rate);

    ratatui::restore();
    info!("Console exited");
    result
}

fn run_loop<B>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    backend: &B,
    msg_tx: &mpsc::Sender<Message>,
    tick_rate: Duration,
) -> Result<()>
where
    B: Backend + Clone + Sync + 'static,
{
    let mut clock = TickClock::new(tick_rate, Instant::now());
    while !state.should_quit {
        // Results of spawned API calls
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, backend, msg_tx);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll(clock.remaining(Instant::now()))? {
            process_message(state, message, backend, msg_tx);
        }
        if clock.due(Instant::now()) {
            process_message(state, Message::Tick, backend, msg_tx);
        }
    }
    Ok(())
}
