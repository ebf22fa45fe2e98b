//! Event handler for processing input events.

use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::{Action, Store, Tab, WagerRequest};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Key bindings.
    keybindings: KeyBindings,
    /// Store reference for state-aware handling.
    store_snapshot: Option<StoreSnapshot>,
}

/// Snapshot of relevant store state for event handling.
#[derive(Clone)]
struct StoreSnapshot {
    active_tab: Tab,
    wager_in_flight: bool,
    has_notification: bool,
    selected_wager: Option<WagerRequest>,
}

impl EventHandler {
    /// Create a new event handler.
    pub fn new(keybindings: KeyBindings) -> Self {
        Self {
            keybindings,
            store_snapshot: None,
        }
    }

    /// Update the store snapshot for state-aware event handling.
    pub fn update_store_snapshot(&mut self, store: &Store) {
        self.store_snapshot = Some(StoreSnapshot {
            active_tab: store.session.active_tab,
            wager_in_flight: store.session.wager_in_flight,
            has_notification: store.session.notification.is_some(),
            selected_wager: store.markets.selected_wager(),
        });
    }

    /// Get the next action from user input.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            match event {
                CrosstermEvent::Key(key) => {
                    if let Some(action) = self.handle_key(key) {
                        return Ok(Some(action));
                    }
                }
                CrosstermEvent::Mouse(mouse) => {
                    if let Some(action) = self.handle_mouse(mouse) {
                        return Ok(Some(action));
                    }
                }
                CrosstermEvent::Resize(_, _) => {
                    // Terminal will automatically redraw
                }
                _ => {}
            }
        }
        Ok(None)
    }

    /// Handle a key event and return an optional action.
    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let snapshot = self.store_snapshot.as_ref()?;
        let input = super::InputEvent::from(key);

        // Global shortcuts
        if input.matches(&self.keybindings.quit) {
            return Some(Action::Quit);
        }

        if snapshot.has_notification && input.matches(&self.keybindings.dismiss) {
            return Some(Action::DismissNotification);
        }

        // Re-entering the active tab re-issues its fetch.
        if input.matches(&self.keybindings.refresh) {
            return Some(Action::SetTab(snapshot.active_tab));
        }

        // Tab switching
        if input.matches(&self.keybindings.market) {
            return Some(Action::SetTab(Tab::Market));
        }
        if input.matches(&self.keybindings.leaderboard) {
            return Some(Action::SetTab(Tab::Leaderboard));
        }
        if input.matches(&self.keybindings.earn) {
            return Some(Action::SetTab(Tab::Earn));
        }
        if input.matches(&self.keybindings.friends) {
            return Some(Action::SetTab(Tab::Friends));
        }
        if input.matches(&self.keybindings.profile) {
            return Some(Action::SetTab(Tab::Profile));
        }
        if input.matches("Tab") {
            return Some(Action::SetTab(snapshot.active_tab.next()));
        }
        if input.key == super::Key::BackTab {
            return Some(Action::SetTab(snapshot.active_tab.prev()));
        }

        // Market cursor
        if input.matches(&self.keybindings.up) || input.matches("Up") {
            return Some(Action::SelectUp);
        }
        if input.matches(&self.keybindings.down) || input.matches("Down") {
            return Some(Action::SelectDown);
        }
        if input.matches(&self.keybindings.left) || input.matches("Left") {
            return Some(Action::OptionLeft);
        }
        if input.matches(&self.keybindings.right) || input.matches("Right") {
            return Some(Action::OptionRight);
        }

        // Stake on the selected option. While a wager is in flight further
        // attempts are disabled.
        if input.matches(&self.keybindings.select)
            && snapshot.active_tab == Tab::Market
            && !snapshot.wager_in_flight
            && let Some(request) = snapshot.selected_wager.clone()
        {
            return Some(Action::PlaceWager(request));
        }

        None
    }

    /// Handle a mouse event and return an optional action.
    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::SelectUp),
            MouseEventKind::ScrollDown => Some(Action::SelectDown),
            _ => None,
        }
    }
}
