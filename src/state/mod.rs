//! State management for Punter.
//!
//! This module provides centralized session-state management with a
//! unidirectional data flow pattern inspired by Redux/Elm architecture.
//! Every mutation is a whole-field replacement applied through [`Store::reduce`];
//! there are no partial or merge updates, so a reader can never observe a torn
//! composite field.

mod leaderboard_state;
mod market_state;
mod profile_state;
mod session_state;

pub use leaderboard_state::{LeaderboardEntry, LeaderboardState};
pub use market_state::{EventOption, MarketEvent, MarketState};
pub use profile_state::{Prediction, PredictionResult, ProfileState};
pub use session_state::{SessionState, Tab};

use crate::error::Result;
use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SetTab(Tab),

    // Fetch completions. Tab-scoped results carry the generation they were
    // issued under; a stale generation is discarded on arrival.
    BalanceLoaded(u64),
    EventsLoaded {
        generation: u64,
        events: Vec<MarketEvent>,
    },
    HistoryLoaded {
        generation: u64,
        entries: Vec<Prediction>,
    },
    LeaderboardLoaded {
        generation: u64,
        entries: Vec<LeaderboardEntry>,
    },

    // Market cursor
    SelectUp,
    SelectDown,
    OptionLeft,
    OptionRight,

    // Wager lifecycle
    PlaceWager(WagerRequest),
    WagerStarted,
    WagerAccepted {
        new_balance: u64,
        option_name: String,
    },
    WagerRejected,

    // UI
    ShowNotification(Notification),
    DismissNotification,
    SetConnected(bool),

    // Quit
    Quit,
}

/// Request to stake points on one option of one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WagerRequest {
    pub event_id: u32,
    pub option_id: u32,
    /// Name snapshot, used for the success notification.
    pub option_name: String,
}

/// A notification to display to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration_secs: u64,
    pub shown_at: DateTime<Utc>,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl Notification {
    fn new(message: impl Into<String>, level: NotificationLevel, duration_secs: u64) -> Self {
        Self {
            message: message.into(),
            level,
            duration_secs,
            shown_at: Utc::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info, 3)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Success, 3)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Warning, 5)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error, 10)
    }

    /// Whether the display duration has elapsed.
    pub fn is_expired(&self) -> bool {
        Utc::now()
            .signed_duration_since(self.shown_at)
            .num_seconds()
            >= self.duration_secs as i64
    }
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// Session state: active tab, sync generation, wager flag, notification.
    pub session: SessionState,
    /// Open events and the market cursor.
    pub markets: MarketState,
    /// Balance and settlement history.
    pub profile: ProfileState,
    /// Leaderboard snapshot.
    pub leaderboard: LeaderboardState,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store with the given action sender.
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            session: SessionState::default(),
            markets: MarketState::default(),
            profile: ProfileState::default(),
            leaderboard: LeaderboardState::default(),
            action_tx,
        }
    }

    /// Dispatch an action to the store.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| crate::Error::channel(e.to_string()))
    }

    /// Drop the current notification once its display duration elapsed.
    pub fn expire_notification(&mut self) {
        if self
            .session
            .notification
            .as_ref()
            .is_some_and(Notification::is_expired)
        {
            self.session.notification = None;
        }
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Navigation. Every tab change opens a new sync generation so a
            // slow fetch issued for a previously active tab cannot overwrite
            // fresher data when it finally lands.
            Action::SetTab(tab) => {
                self.session.active_tab = tab;
                self.session.sync_generation += 1;
            }

            // Fetch completions. The balance is authoritative whenever it
            // arrives; tab-scoped fields only accept the current generation.
            Action::BalanceLoaded(balance) => {
                self.profile.balance = balance;
            }
            Action::EventsLoaded { generation, events } => {
                if generation == self.session.sync_generation {
                    self.markets.replace_events(events);
                } else {
                    tracing::debug!(generation, "discarding stale events fetch");
                }
            }
            Action::HistoryLoaded {
                generation,
                entries,
            } => {
                if generation == self.session.sync_generation {
                    self.profile.replace_history(entries);
                } else {
                    tracing::debug!(generation, "discarding stale history fetch");
                }
            }
            Action::LeaderboardLoaded {
                generation,
                entries,
            } => {
                if generation == self.session.sync_generation {
                    self.leaderboard.replace_entries(entries);
                } else {
                    tracing::debug!(generation, "discarding stale leaderboard fetch");
                }
            }

            // Market cursor. Only meaningful while the market tab is active.
            Action::SelectUp => {
                if self.session.active_tab == Tab::Market {
                    self.markets.select_prev();
                }
            }
            Action::SelectDown => {
                if self.session.active_tab == Tab::Market {
                    self.markets.select_next();
                }
            }
            Action::OptionLeft => {
                if self.session.active_tab == Tab::Market {
                    self.markets.prev_option();
                }
            }
            Action::OptionRight => {
                if self.session.active_tab == Tab::Market {
                    self.markets.next_option();
                }
            }

            // Wager lifecycle. The transaction itself decides whether to
            // submit; the store only records the phases.
            Action::PlaceWager(_) => {}
            Action::WagerStarted => {
                self.session.wager_in_flight = true;
            }
            Action::WagerAccepted {
                new_balance,
                option_name,
            } => {
                self.profile.balance = new_balance;
                self.session.wager_in_flight = false;
                self.session.notification = Some(Notification::success(format!(
                    "Wager on \"{option_name}\" accepted!"
                )));
            }
            Action::WagerRejected => {
                self.session.wager_in_flight = false;
                self.session.notification =
                    Some(Notification::error("Wager was not accepted"));
            }

            // UI
            Action::ShowNotification(notification) => {
                self.session.notification = Some(notification);
            }
            Action::DismissNotification => {
                self.session.notification = None;
            }
            Action::SetConnected(connected) => {
                self.session.connected = connected;
            }

            // Quit
            Action::Quit => {
                self.session.should_quit = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store() -> Store {
        let (action_tx, _action_rx) = mpsc::unbounded_channel();
        Store::new(action_tx)
    }

    fn sample_events() -> Vec<MarketEvent> {
        vec![MarketEvent {
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
        }]
    }

    #[test]
    fn test_set_tab_bumps_generation() {
        let mut store = store();
        store.reduce(Action::SetTab(Tab::Leaderboard));
        assert_eq!(store.session.active_tab, Tab::Leaderboard);
        assert_eq!(store.session.sync_generation, 1);

        store.reduce(Action::SetTab(Tab::Market));
        assert_eq!(store.session.sync_generation, 2);
    }

    #[test]
    fn test_current_generation_fetch_is_applied() {
        let mut store = store();
        store.reduce(Action::EventsLoaded {
            generation: 0,
            events: sample_events(),
        });
        assert_eq!(store.markets.events.len(), 1);
    }

    #[test]
    fn test_stale_generation_fetch_is_discarded() {
        let mut store = store();
        store.reduce(Action::EventsLoaded {
            generation: 0,
            events: sample_events(),
        });

        // The user has since moved on; the late arrival must not win.
        store.reduce(Action::SetTab(Tab::Profile));
        store.reduce(Action::EventsLoaded {
            generation: 0,
            events: Vec::new(),
        });
        assert_eq!(store.markets.events.len(), 1);
    }

    #[test]
    fn test_stale_leaderboard_fetch_is_discarded() {
        let mut store = store();
        store.reduce(Action::SetTab(Tab::Leaderboard));
        store.reduce(Action::LeaderboardLoaded {
            generation: 1,
            entries: vec![LeaderboardEntry {
                username: "ada".into(),
                balance: 900,
            }],
        });
        store.reduce(Action::SetTab(Tab::Market));
        store.reduce(Action::LeaderboardLoaded {
            generation: 1,
            entries: Vec::new(),
        });
        assert_eq!(store.leaderboard.entries.len(), 1);
    }

    #[test]
    fn test_balance_is_replaced_not_merged() {
        let mut store = store();
        store.reduce(Action::BalanceLoaded(500));
        assert_eq!(store.profile.balance, 500);
        store.reduce(Action::BalanceLoaded(350));
        assert_eq!(store.profile.balance, 350);
    }

    #[test]
    fn test_wager_accepted_applies_authoritative_balance() {
        let mut store = store();
        store.reduce(Action::BalanceLoaded(500));
        store.reduce(Action::WagerStarted);
        assert!(store.session.wager_in_flight);

        // 385, not 400: the receipt wins even when it disagrees with any
        // locally computable delta.
        store.reduce(Action::WagerAccepted {
            new_balance: 385,
            option_name: "Red".into(),
        });
        assert_eq!(store.profile.balance, 385);
        assert!(!store.session.wager_in_flight);
        let notification = store.session.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Success);
        assert!(notification.message.contains("Red"));
    }

    #[test]
    fn test_wager_rejected_keeps_balance_and_clears_flag() {
        let mut store = store();
        store.reduce(Action::BalanceLoaded(500));
        store.reduce(Action::WagerStarted);
        store.reduce(Action::WagerRejected);

        assert_eq!(store.profile.balance, 500);
        assert!(!store.session.wager_in_flight);
        let notification = store.session.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Error);
    }

    #[test]
    fn test_cursor_actions_only_apply_on_market_tab() {
        let mut store = store();
        store.reduce(Action::EventsLoaded {
            generation: 0,
            events: sample_events(),
        });
        store.reduce(Action::OptionRight);
        assert_eq!(store.markets.selected_option, 1);

        store.reduce(Action::SetTab(Tab::Profile));
        store.reduce(Action::OptionLeft);
        assert_eq!(store.markets.selected_option, 1);
    }

    #[test]
    fn test_dispatch_delivers_to_channel() {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();
        let store = Store::new(action_tx);
        store.dispatch(Action::Quit).unwrap();
        assert!(matches!(action_rx.try_recv(), Ok(Action::Quit)));
    }

    #[test]
    fn test_notification_lifecycle() {
        let mut store = store();
        store.reduce(Action::ShowNotification(Notification::info("hello")));
        assert!(store.session.notification.is_some());
        store.reduce(Action::DismissNotification);
        assert!(store.session.notification.is_none());
    }

    #[test]
    fn test_expire_notification_respects_duration() {
        let mut store = store();
        let mut notification = Notification::info("old news");
        notification.shown_at = Utc::now() - chrono::Duration::seconds(30);
        store.reduce(Action::ShowNotification(notification));
        store.expire_notification();
        assert!(store.session.notification.is_none());

        store.reduce(Action::ShowNotification(Notification::info("fresh")));
        store.expire_notification();
        assert!(store.session.notification.is_some());
    }
}
