//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the event loop, state management, and rendering.

use crate::api::{LedgerApi, LedgerClient};
use crate::config::Config;
use crate::error::Result;
use crate::events::EventHandler;
use crate::host::TerminalBell;
use crate::state::{Action, Store};
use crate::sync::DataSyncController;
use crate::ui::Ui;
use crate::wager::WagerTransaction;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use tokio::sync::mpsc;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Data synchronization controller.
    sync: DataSyncController,
    /// Wager transaction executor.
    wager: WagerTransaction,
    /// Configuration.
    #[allow(dead_code)]
    config: Config,
}

impl App {
    /// Create a new application.
    pub fn new(config: Config) -> Result<Self> {
        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        // Create store
        let store = Store::new(action_tx.clone());

        // Create event handler
        let event_handler = EventHandler::new(config.keybindings.clone());

        // Create the ledger boundary and the two components driving it
        let client: Arc<dyn LedgerApi> =
            Arc::new(LedgerClient::builder().config(config.api.clone()).build()?);
        let sync = DataSyncController::new(Arc::clone(&client), config.user.clone(), action_tx);
        let wager = WagerTransaction::new(client, Arc::new(TerminalBell), config.user.clone());

        Ok(Self {
            terminal,
            store,
            event_handler,
            action_rx,
            sync,
            wager,
            config,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        // Probe the ledger and issue the session-start reads: balance and
        // open events, regardless of the active tab.
        self.sync.probe_connection();
        self.sync.start_session(self.store.session.sync_generation);

        // Main event loop
        loop {
            self.store.expire_notification();

            // Update event handler with current state
            self.event_handler.update_store_snapshot(&self.store);

            // Render UI
            self.terminal.draw(|frame| {
                Ui::render(frame, &self.store);
            })?;

            // Handle events and actions
            tokio::select! {
                // Handle terminal events
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        self.handle_action(action).await;
                    }
                }

                // Handle actions from the channel
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action).await;
                }
            }

            // Check if we should quit
            if self.store.session.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle an action.
    async fn handle_action(&mut self, action: Action) {
        match action {
            Action::SetTab(tab) => {
                self.store.reduce(Action::SetTab(tab));
                self.sync
                    .sync_tab(tab, self.store.session.sync_generation);
            }
            Action::PlaceWager(request) => {
                self.wager.place(&mut self.store, request).await;
            }
            _ => {
                // Let the store handle the action
                self.store.reduce(action);
            }
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
