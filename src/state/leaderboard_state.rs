//! Leaderboard state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One ranked row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Display name.
    pub username: String,
    /// Point balance.
    pub balance: u64,
}

/// State for the leaderboard.
///
/// Entries are kept in the order the ledger returned them (ranked by
/// descending balance server-side); they are never re-sorted locally.
#[derive(Debug, Default)]
pub struct LeaderboardState {
    /// Ranked entries, as last fetched.
    pub entries: Vec<LeaderboardEntry>,
    /// Last update timestamp.
    pub last_updated: Option<DateTime<Utc>>,
}

impl LeaderboardState {
    /// Replace the leaderboard wholesale.
    pub fn replace_entries(&mut self, entries: Vec<LeaderboardEntry>) {
        self.entries = entries;
        self.last_updated = Some(Utc::now());
    }
}
