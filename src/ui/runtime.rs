use crate::controller::Controller;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Redraw cadence; async results show up within one tick.
const TICK_RATE: Duration = Duration::from_millis(200);
const COMMAND_BUFFER: usize = 16;

/// Runs the full-screen UI until the user quits.
///
/// Startup kicks off the same connect + read the page load did.
pub fn run(mut app: App, controller: Controller, handle: &Handle) -> io::Result<()> {
    let (sender, receiver) = mpsc::channel(COMMAND_BUFFER);
    app.set_command_sender(sender);
    let worker = spawn_command_worker(handle, controller.clone(), receiver);
    handle.spawn(async move { controller.on_load().await });

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Stop the input thread before the shell gets the terminal back
    drop(events);
    drop(guard);
    worker.abort();
    Ok(())
}

/// Drains UI commands, running each on its own task.
///
/// Commands are not serialized against each other; overlapping mints are
/// turned away by the controller's single-flight guard.
pub fn spawn_command_worker(
    handle: &Handle,
    controller: Controller,
    mut commands: mpsc::Receiver<UiCommand>,
) -> JoinHandle<()> {
    handle.spawn(async move {
        while let Some(command) = commands.recv().await {
            tracing::debug!(?command, "dispatching UI command");
            let controller = controller.clone();
            tokio::spawn(async move {
                match command {
                    UiCommand::Connect => controller.connect_wallet().await,
                    UiCommand::RefreshStats => controller.refresh_collection_stats().await,
                    UiCommand::Mint { edition } => {
                        // Outcome is already logged and reflected in the state
                        let _ = controller.mint_token(&edition).await;
                    }
                }
            });
        }
    })
}
