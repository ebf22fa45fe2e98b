//! Session-level state.

use super::Notification;

/// The five mutually exclusive UI sections. The active tab decides which
/// remote read the sync controller issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Market,
    Leaderboard,
    Earn,
    Friends,
    Profile,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 5] = [
        Tab::Market,
        Tab::Leaderboard,
        Tab::Earn,
        Tab::Friends,
        Tab::Profile,
    ];

    /// The tab to the right, wrapping around.
    pub fn next(self) -> Tab {
        let index = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// The tab to the left, wrapping around.
    pub fn prev(self) -> Tab {
        let index = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Market => write!(f, "Market"),
            Self::Leaderboard => write!(f, "Top"),
            Self::Earn => write!(f, "Earn"),
            Self::Friends => write!(f, "Friends"),
            Self::Profile => write!(f, "Profile"),
        }
    }
}

/// Global session state.
///
/// Created empty at session start, populated by the sync controller, and
/// discarded at session end. Nothing here is persisted.
#[derive(Debug, Default)]
pub struct SessionState {
    /// Currently active tab.
    pub active_tab: Tab,
    /// Tab-activation generation. Bumped on every tab change; fetch results
    /// issued under an older generation are discarded on arrival.
    pub sync_generation: u64,
    /// Whether a wager is currently in flight. Further wager attempts are
    /// ignored until the outstanding one resolves.
    pub wager_in_flight: bool,
    /// Current notification.
    pub notification: Option<Notification>,
    /// Whether the ledger service answered the startup probe.
    pub connected: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl SessionState {
    /// Create a new session state.
    pub fn new() -> Self {
        Self::default()
    }
}
