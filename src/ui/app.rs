use crate::catalog::Catalog;
use crate::controller::Controller;
use crate::ui::view::{project, MintView};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Work the UI hands to the async side. Each command runs as its own task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Connect,
    RefreshStats,
    Mint { edition: String },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

pub struct App {
    should_quit: bool,
    controller: Controller,
    catalog: Arc<Catalog>,
    selection: usize,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(controller: Controller, catalog: Arc<Catalog>) -> Self {
        Self {
            should_quit: false,
            controller,
            catalog,
            selection: 0,
            command_sender: None,
            last_command_error: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Current state projected for display.
    pub fn view(&self) -> MintView {
        project(
            &self.controller.snapshot(),
            &self.catalog,
            self.controller.settings(),
        )
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn selected_edition(&self) -> Option<&str> {
        self.catalog
            .items()
            .get(self.selection)
            .map(|item| item.edition.as_str())
    }

    /// Moves the gallery selection, wrapping at both ends.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.catalog.len();
        if len == 0 {
            return;
        }
        let len = len as isize;
        self.selection = (self.selection as isize + delta).rem_euclid(len) as usize;
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    pub fn request_connect(&mut self) {
        self.send_command(UiCommand::Connect);
    }

    pub fn request_refresh(&mut self) {
        self.send_command(UiCommand::RefreshStats);
    }

    /// Purchase action for the selected card. Only offered once connected,
    /// like the gallery itself.
    pub fn request_mint_selected(&mut self) {
        if !self.controller.snapshot().connection.is_connected() {
            return;
        }
        if let Some(edition) = self.selected_edition().map(str::to_string) {
            self.send_command(UiCommand::Mint { edition });
        }
    }

    fn send_command(&mut self, command: UiCommand) {
        let Some(sender) = &self.command_sender else {
            tracing::debug!(?command, "no command channel attached");
            return;
        };
        match sender.try_send(command) {
            Ok(()) => self.last_command_error = None,
            Err(err) => {
                tracing::warn!(error = %err, "failed to queue UI command");
                self.last_command_error = Some(err.to_string());
            }
        }
    }
}
