//! Open-events state and the market cursor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::WagerRequest;

/// One backable option of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOption {
    /// Option ID, unique within its event.
    pub id: u32,
    /// Option name (e.g. "Red", "Blue").
    pub name: String,
}

/// A published event open for predictions.
///
/// Immutable once fetched within a session; the event list is replaced
/// wholesale on every fetch. `options` is never empty for a stored event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketEvent {
    /// Event ID.
    pub id: u32,
    /// Event title.
    pub title: String,
    /// Backable options, in the order the ledger returns them.
    pub options: Vec<EventOption>,
}

/// State for the event market.
#[derive(Debug, Default)]
pub struct MarketState {
    /// All open events, as last fetched.
    pub events: Vec<MarketEvent>,
    /// Currently selected event index.
    pub selected_index: Option<usize>,
    /// Selected option within the selected event.
    pub selected_option: usize,
    /// Last update timestamp.
    pub last_updated: Option<DateTime<Utc>>,
}

impl MarketState {
    /// Get the currently selected event.
    pub fn selected_event(&self) -> Option<&MarketEvent> {
        self.selected_index.and_then(|i| self.events.get(i))
    }

    /// Build a wager request for the current cursor position.
    pub fn selected_wager(&self) -> Option<WagerRequest> {
        let event = self.selected_event()?;
        let option = event.options.get(self.selected_option)?;
        Some(WagerRequest {
            event_id: event.id,
            option_id: option.id,
            option_name: option.name.clone(),
        })
    }

    /// Replace the event list wholesale and keep the cursor in bounds.
    pub fn replace_events(&mut self, events: Vec<MarketEvent>) {
        self.events = events;
        self.last_updated = Some(Utc::now());

        if self.events.is_empty() {
            self.selected_index = None;
        } else {
            let max = self.events.len() - 1;
            self.selected_index = Some(self.selected_index.unwrap_or(0).min(max));
        }
        self.clamp_option();
    }

    /// Move the event cursor up.
    pub fn select_prev(&mut self) {
        if let Some(index) = self.selected_index {
            self.selected_index = Some(index.saturating_sub(1));
            self.selected_option = 0;
        }
    }

    /// Move the event cursor down.
    pub fn select_next(&mut self) {
        if let Some(index) = self.selected_index {
            let max = self.events.len().saturating_sub(1);
            self.selected_index = Some((index + 1).min(max));
            self.selected_option = 0;
        }
    }

    /// Move the option cursor left.
    pub fn prev_option(&mut self) {
        self.selected_option = self.selected_option.saturating_sub(1);
    }

    /// Move the option cursor right.
    pub fn next_option(&mut self) {
        self.selected_option += 1;
        self.clamp_option();
    }

    fn clamp_option(&mut self) {
        let max = self
            .selected_event()
            .map(|e| e.options.len().saturating_sub(1))
            .unwrap_or(0);
        self.selected_option = self.selected_option.min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_events() -> Vec<MarketEvent> {
        vec![
            MarketEvent {
                id: 1,
                title: "Who wins the final?".into(),
                options: vec![
                    EventOption {
                        id: 1,
                        name: "Red".into(),
                    },
                    EventOption {
                        id: 2,
                        name: "Blue".into(),
                    },
                ],
            },
            MarketEvent {
                id: 2,
                title: "Rain tomorrow?".into(),
                options: vec![
                    EventOption {
                        id: 1,
                        name: "Yes".into(),
                    },
                    EventOption {
                        id: 2,
                        name: "No".into(),
                    },
                ],
            },
        ]
    }

    #[test]
    fn test_replace_events_initializes_cursor() {
        let mut state = MarketState::default();
        assert!(state.selected_event().is_none());

        state.replace_events(two_events());
        assert_eq!(state.selected_index, Some(0));
        assert!(state.last_updated.is_some());
    }

    #[test]
    fn test_replace_events_clamps_cursor() {
        let mut state = MarketState::default();
        state.replace_events(two_events());
        state.select_next();
        assert_eq!(state.selected_index, Some(1));

        // A shorter list arrives; cursor must stay in bounds.
        state.replace_events(two_events().drain(..1).collect());
        assert_eq!(state.selected_index, Some(0));

        state.replace_events(Vec::new());
        assert_eq!(state.selected_index, None);
    }

    #[test]
    fn test_option_cursor_stays_in_bounds() {
        let mut state = MarketState::default();
        state.replace_events(two_events());

        state.next_option();
        assert_eq!(state.selected_option, 1);
        state.next_option();
        assert_eq!(state.selected_option, 1);
        state.prev_option();
        state.prev_option();
        assert_eq!(state.selected_option, 0);
    }

    #[test]
    fn test_selected_wager_names_the_option() {
        let mut state = MarketState::default();
        state.replace_events(two_events());
        state.next_option();

        let request = state.selected_wager().unwrap();
        assert_eq!(request.event_id, 1);
        assert_eq!(request.option_id, 2);
        assert_eq!(request.option_name, "Blue");
    }

    #[test]
    fn test_selected_wager_empty_market() {
        let state = MarketState::default();
        assert!(state.selected_wager().is_none());
    }
}
