//! UI rendering using ratatui.
//!
//! This module contains all TUI components and rendering logic. Rendering is
//! a pure projection of the store; no state changes happen here.

mod layout;
mod widgets;

pub use layout::Layout;
pub use widgets::{
    EarnScreen, FriendsScreen, LeaderboardTable, MarketList, ProfileScreen, StatusBar, TabBar,
};

use crate::state::{Store, Tab};
use ratatui::Frame;

/// Main UI renderer.
pub struct Ui;

impl Ui {
    /// Render the entire UI.
    pub fn render(frame: &mut Frame, store: &Store) {
        let layout = Layout::new(frame.area());

        // Render status bar
        StatusBar::render(frame, layout.status_area, store);

        // Render main content based on the active tab
        match store.session.active_tab {
            Tab::Market => MarketList::render(frame, layout.main_area, store),
            Tab::Leaderboard => LeaderboardTable::render(frame, layout.main_area, store),
            Tab::Earn => EarnScreen::render(frame, layout.main_area),
            Tab::Friends => FriendsScreen::render(frame, layout.main_area),
            Tab::Profile => ProfileScreen::render(frame, layout.main_area, store),
        }

        // Render bottom navigation
        TabBar::render(frame, layout.tab_area, store);

        // Render notification if present
        if let Some(notification) = &store.session.notification {
            widgets::render_notification(frame, layout.notification_area, notification);
        }
    }
}
