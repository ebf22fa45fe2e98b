//! Tab-driven data synchronization.
//!
//! The sync controller decides which remote reads to issue on session start
//! and on every tab activation, and feeds the results into the store through
//! the action channel. Reads are best-effort: a failure is logged and
//! swallowed, leaving the corresponding field at its last-known-good value.

use crate::api::LedgerApi;
use crate::config::UserConfig;
use crate::state::{Action, Tab};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Issues remote reads and applies results into the store.
pub struct DataSyncController {
    /// Ledger boundary.
    client: Arc<dyn LedgerApi>,
    /// Host-provided identity.
    user: UserConfig,
    /// Action sender for delivering fetch results.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl DataSyncController {
    /// Create a new sync controller.
    pub fn new(
        client: Arc<dyn LedgerApi>,
        user: UserConfig,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        Self {
            client,
            user,
            action_tx,
        }
    }

    /// Session-start reads: balance and open events, regardless of which tab
    /// is active.
    pub fn start_session(&self, generation: u64) {
        self.fetch_balance();
        self.fetch_events(generation);
    }

    /// Issue exactly the read associated with the newly active tab. Re-entry
    /// always refetches; there is no cache.
    pub fn sync_tab(&self, tab: Tab, generation: u64) {
        match tab {
            Tab::Market => self.fetch_events(generation),
            Tab::Leaderboard => self.fetch_leaderboard(generation),
            Tab::Profile => self.fetch_history(generation),
            Tab::Earn | Tab::Friends => {}
        }
    }

    /// Refetch the authoritative balance. Generation-free: a balance is
    /// applied whenever it arrives.
    pub fn fetch_balance(&self) {
        let client = Arc::clone(&self.client);
        let action_tx = self.action_tx.clone();
        let user = self.user.clone();

        tokio::spawn(async move {
            match client.fetch_user(user.id, &user.display_name).await {
                Ok(account) => {
                    let _ = action_tx.send(Action::BalanceLoaded(account.balance));
                }
                Err(error) => {
                    tracing::warn!(%error, "user fetch failed, keeping last known balance");
                }
            }
        });
    }

    fn fetch_events(&self, generation: u64) {
        let client = Arc::clone(&self.client);
        let action_tx = self.action_tx.clone();

        tokio::spawn(async move {
            match client.fetch_events().await {
                Ok(events) => {
                    let _ = action_tx.send(Action::EventsLoaded { generation, events });
                }
                Err(error) => {
                    tracing::warn!(%error, "events fetch failed, keeping last known list");
                }
            }
        });
    }

    fn fetch_history(&self, generation: u64) {
        let client = Arc::clone(&self.client);
        let action_tx = self.action_tx.clone();
        let user_id = self.user.id;

        tokio::spawn(async move {
            match client.fetch_history(user_id).await {
                Ok(entries) => {
                    let _ = action_tx.send(Action::HistoryLoaded {
                        generation,
                        entries,
                    });
                }
                Err(error) => {
                    tracing::warn!(%error, "history fetch failed, keeping last known list");
                }
            }
        });
    }

    fn fetch_leaderboard(&self, generation: u64) {
        let client = Arc::clone(&self.client);
        let action_tx = self.action_tx.clone();

        tokio::spawn(async move {
            match client.fetch_leaderboard().await {
                Ok(entries) => {
                    let _ = action_tx.send(Action::LeaderboardLoaded {
                        generation,
                        entries,
                    });
                }
                Err(error) => {
                    tracing::warn!(%error, "leaderboard fetch failed, keeping last known list");
                }
            }
        });
    }

    /// Probe the ledger service and report connectivity.
    pub fn probe_connection(&self) {
        let client = Arc::clone(&self.client);
        let action_tx = self.action_tx.clone();

        tokio::spawn(async move {
            let connected = client.ping().await.is_ok();
            let _ = action_tx.send(Action::SetConnected(connected));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockLedgerApi, UserAccount};
    use crate::error::Error;
    use crate::state::{LeaderboardEntry, Store};
    use std::time::Duration;

    fn controller(
        mock: MockLedgerApi,
    ) -> (DataSyncController, mpsc::UnboundedReceiver<Action>) {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let user = UserConfig {
            id: 42,
            display_name: "Player".to_string(),
        };
        (
            DataSyncController::new(Arc::new(mock), user, action_tx),
            action_rx,
        )
    }

    async fn recv(rx: &mut mpsc::UnboundedReceiver<Action>) -> Action {
        tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("expected an action")
            .expect("channel closed")
    }

    async fn assert_silent(rx: &mut mpsc::UnboundedReceiver<Action>) {
        let outcome = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
        assert!(outcome.is_err(), "expected no action, got {outcome:?}");
    }

    #[tokio::test]
    async fn test_leaderboard_tab_issues_exactly_its_fetch() {
        let mut mock = MockLedgerApi::new();
        mock.expect_fetch_leaderboard().times(1).returning(|| {
            Ok(vec![LeaderboardEntry {
                username: "ada".to_string(),
                balance: 900,
            }])
        });

        let (sync, mut rx) = controller(mock);
        sync.sync_tab(Tab::Leaderboard, 3);

        match recv(&mut rx).await {
            Action::LeaderboardLoaded {
                generation,
                entries,
            } => {
                assert_eq!(generation, 3);
                assert_eq!(entries.len(), 1);
            }
            other => panic!("unexpected action: {other:?}"),
        }
        assert_silent(&mut rx).await;
    }

    #[tokio::test]
    async fn test_revisiting_a_tab_always_refetches() {
        let mut mock = MockLedgerApi::new();
        mock.expect_fetch_events().times(2).returning(|| Ok(Vec::new()));

        let (sync, mut rx) = controller(mock);
        sync.sync_tab(Tab::Market, 1);
        recv(&mut rx).await;
        sync.sync_tab(Tab::Market, 2);
        recv(&mut rx).await;
    }

    #[tokio::test]
    async fn test_earn_and_friends_issue_no_fetch() {
        let mock = MockLedgerApi::new();
        let (sync, mut rx) = controller(mock);

        sync.sync_tab(Tab::Earn, 1);
        sync.sync_tab(Tab::Friends, 2);
        assert_silent(&mut rx).await;
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_field_unchanged() {
        let mut mock = MockLedgerApi::new();
        mock.expect_fetch_leaderboard()
            .times(1)
            .returning(|| Err(Error::application("service unavailable")));

        let (sync, mut rx) = controller(mock);
        let (store_tx, _store_rx) = mpsc::unbounded_channel();
        let mut store = Store::new(store_tx);

        sync.sync_tab(Tab::Leaderboard, 1);
        // No action arrives; the leaderboard stays at its previous (empty
        // on first load) value and nothing propagates to the caller.
        assert_silent(&mut rx).await;
        assert!(store.leaderboard.entries.is_empty());
        store.expire_notification();
        assert!(store.session.notification.is_none());
    }

    #[tokio::test]
    async fn test_session_start_fetches_balance_and_events() {
        let mut mock = MockLedgerApi::new();
        mock.expect_fetch_user()
            .times(1)
            .withf(|id, name| *id == 42 && name == "Player")
            .returning(|_, _| {
                Ok(UserAccount {
                    user_id: 42,
                    balance: 500,
                })
            });
        mock.expect_fetch_events().times(1).returning(|| Ok(Vec::new()));

        let (sync, mut rx) = controller(mock);
        sync.start_session(0);

        let mut saw_balance = false;
        let mut saw_events = false;
        for _ in 0..2 {
            match recv(&mut rx).await {
                Action::BalanceLoaded(balance) => {
                    assert_eq!(balance, 500);
                    saw_balance = true;
                }
                Action::EventsLoaded { generation, .. } => {
                    assert_eq!(generation, 0);
                    saw_events = true;
                }
                other => panic!("unexpected action: {other:?}"),
            }
        }
        assert!(saw_balance && saw_events);
    }

    #[tokio::test]
    async fn test_probe_reports_connectivity() {
        let mut mock = MockLedgerApi::new();
        mock.expect_ping().times(1).returning(|| Ok(()));

        let (sync, mut rx) = controller(mock);
        sync.probe_connection();

        match recv(&mut rx).await {
            Action::SetConnected(connected) => assert!(connected),
            other => panic!("unexpected action: {other:?}"),
        }
    }
}
