//! Balance and settlement-history state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Settlement result of a prediction.
///
/// `Pending` is the only state that may change between fetches, and only a
/// fresh fetch changes it; the client never transitions a result itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionResult {
    Won,
    Lost,
    #[default]
    #[serde(other)]
    Pending,
}

impl std::fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Won => write!(f, "Won"),
            Self::Lost => write!(f, "Lost"),
        }
    }
}

/// One entry of the user's settlement history.
///
/// A read-only projection from the ledger; never locally mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Title of the event the stake was placed on.
    pub event_title: String,
    /// Name snapshot of the chosen option.
    pub chosen_option: String,
    /// Settlement result.
    pub result: PredictionResult,
}

/// State for the user's profile: point balance and prediction history.
#[derive(Debug, Default)]
pub struct ProfileState {
    /// Current point balance. Written only from a wager receipt or a
    /// user fetch, both carrying the ledger's authoritative value.
    pub balance: u64,
    /// Settlement history, newest first as the ledger returns it.
    pub history: Vec<Prediction>,
    /// Last history update timestamp.
    pub last_updated: Option<DateTime<Utc>>,
}

impl ProfileState {
    /// Replace the history wholesale.
    pub fn replace_history(&mut self, history: Vec<Prediction>) {
        self.history = history;
        self.last_updated = Some(Utc::now());
    }

    /// Count of predictions still awaiting settlement.
    pub fn pending_count(&self) -> usize {
        self.history
            .iter()
            .filter(|p| p.result == PredictionResult::Pending)
            .count()
    }
}
