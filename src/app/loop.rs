use crate::app::{
    action::Action, handler::handle_command, input::map_event_to_action, reducer, state::AppState,
    ui,
};
use crate::domain::store::Store;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);
/// How long the reader blocks before checking whether the loop is gone.
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Blocking terminal input, as crossterm exposes it.
pub trait EventSource: Send + 'static {
    fn poll(&mut self, timeout: Duration) -> std::io::Result<bool>;
    fn read(&mut self) -> std::io::Result<Event>;
}

pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> std::io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> std::io::Result<Event> {
        event::read()
    }
}

/// Forward input on a blocking thread until the receiver is dropped or the
/// source fails.
pub fn spawn_event_reader<S: EventSource>(
    mut source: S,
    event_tx: mpsc::Sender<Result<Event, std::io::Error>>,
) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !event_tx.is_closed() {
            let next = match source.poll(INPUT_POLL) {
                Ok(false) => continue,
                Ok(true) => source.read(),
                Err(e) => Err(e),
            };
            let failed = next.is_err();
            if event_tx.blocking_send(next).is_err() || failed {
                break;
            }
        }
        tracing::debug!("input reader stopped");
    })
}

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    store: Store,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    let reader = spawn_event_reader(CrosstermEvents, event_tx);

    let result = run_loop_with_events(terminal, app_state, store, event_rx).await;
    // The receiver is gone, so the reader exits within one poll.
    if let Err(e) = reader.await {
        tracing::warn!(error = %e, "input reader panicked");
    }
    result
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    mut store: Store,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let mut interval = interval(TICK_RATE);

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            res = event_rx.recv() => match res {
                Some(Ok(event)) => map_event_to_action(event, &app_state, terminal.size()?),
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
        };

        // --- 3. Update (Reducer) ---
        // Commands run to completion before the next event is read, so
        // writes reach the backend in the order they were issued.
        let mut pending: VecDeque<Action> = action.into_iter().collect();
        while let Some(action) = pending.pop_front() {
            if let Some(cmd) = reducer::update(&mut app_state, action) {
                tracing::debug!(?cmd, "dispatching");
                pending.extend(handle_command(cmd, &mut store).await);
            }
            if app_state.should_quit {
                return Ok(());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
