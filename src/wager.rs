//! The wager transaction.
//!
//! A single stake against the ledger, executed confirm-then-apply: no
//! speculative balance is shown before the ledger answers, and on success the
//! local balance becomes exactly the receipt's value, never a locally
//! computed delta. A failed wager leaves the balance untouched.

use crate::api::LedgerApi;
use crate::config::UserConfig;
use crate::host::Haptics;
use crate::state::{Action, Notification, Store, WagerRequest};
use std::sync::Arc;

/// Minimum stake in points. The only business rule enforced client-side;
/// whether an event is still open or an option valid is the ledger's call.
pub const MIN_STAKE: u64 = 100;

/// Executes a single stake against the ledger.
pub struct WagerTransaction {
    /// Ledger boundary.
    client: Arc<dyn LedgerApi>,
    /// Host feedback boundary.
    haptics: Arc<dyn Haptics>,
    /// Host-provided identity.
    user: UserConfig,
}

impl WagerTransaction {
    /// Create a new wager transaction executor.
    pub fn new(client: Arc<dyn LedgerApi>, haptics: Arc<dyn Haptics>, user: UserConfig) -> Self {
        Self {
            client,
            haptics,
            user,
        }
    }

    /// Place a wager on one option of one event.
    ///
    /// Attempts while another wager is in flight are ignored. Below
    /// [`MIN_STAKE`] no request is sent and no state changes. Otherwise the
    /// in-flight flag is held for the duration of the submission and cleared
    /// on every exit path.
    pub async fn place(&self, store: &mut Store, request: WagerRequest) {
        if store.session.wager_in_flight {
            tracing::debug!("ignoring wager attempt while one is in flight");
            return;
        }

        if store.profile.balance < MIN_STAKE {
            store.reduce(Action::ShowNotification(Notification::warning(format!(
                "Not enough $PRED! A stake costs {MIN_STAKE}"
            ))));
            return;
        }

        self.haptics.impact();
        store.reduce(Action::WagerStarted);

        let outcome = self
            .client
            .submit_wager(self.user.id, request.event_id, request.option_id)
            .await;

        // A transport failure and a ledger rejection are observationally
        // identical here; both arms clear the in-flight flag.
        match outcome {
            Ok(receipt) => {
                self.haptics.outcome(true);
                store.reduce(Action::WagerAccepted {
                    new_balance: receipt.new_balance,
                    option_name: request.option_name,
                });
            }
            Err(error) => {
                tracing::warn!(%error, "wager submission failed, balance unchanged");
                self.haptics.outcome(false);
                store.reduce(Action::WagerRejected);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockLedgerApi, WagerReceipt};
    use crate::error::Error;
    use crate::host::MockHaptics;
    use crate::state::NotificationLevel;
    use tokio::sync::mpsc;

    fn store_with_balance(balance: u64) -> Store {
        let (action_tx, _action_rx) = mpsc::unbounded_channel();
        let mut store = Store::new(action_tx);
        store.reduce(Action::BalanceLoaded(balance));
        store
    }

    fn red_on_event_one() -> WagerRequest {
        WagerRequest {
            event_id: 1,
            option_id: 1,
            option_name: "Red".to_string(),
        }
    }

    fn transaction(client: MockLedgerApi, haptics: MockHaptics) -> WagerTransaction {
        WagerTransaction::new(
            Arc::new(client),
            Arc::new(haptics),
            UserConfig {
                id: 42,
                display_name: "Player".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_accepted_wager_applies_receipt_balance() {
        let mut client = MockLedgerApi::new();
        client
            .expect_submit_wager()
            .times(1)
            .withf(|user_id, event_id, option_id| {
                *user_id == 42 && *event_id == 1 && *option_id == 1
            })
            .returning(|_, _, _| Ok(WagerReceipt { new_balance: 400 }));
        let mut haptics = MockHaptics::new();
        haptics.expect_impact().times(1).return_const(());
        haptics
            .expect_outcome()
            .times(1)
            .withf(|success| *success)
            .return_const(());

        let mut store = store_with_balance(500);
        assert!(!store.session.wager_in_flight);

        transaction(client, haptics)
            .place(&mut store, red_on_event_one())
            .await;

        assert_eq!(store.profile.balance, 400);
        assert!(!store.session.wager_in_flight);
        let notification = store.session.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Success);
        assert!(notification.message.contains("Red"));
    }

    #[tokio::test]
    async fn test_insufficient_funds_sends_nothing() {
        let mut client = MockLedgerApi::new();
        client.expect_submit_wager().never();
        let mut haptics = MockHaptics::new();
        haptics.expect_impact().never();

        let mut store = store_with_balance(50);
        transaction(client, haptics)
            .place(&mut store, red_on_event_one())
            .await;

        assert_eq!(store.profile.balance, 50);
        assert!(!store.session.wager_in_flight);
        let notification = store.session.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Warning);
    }

    #[tokio::test]
    async fn test_exact_minimum_stake_is_submitted() {
        let mut client = MockLedgerApi::new();
        client
            .expect_submit_wager()
            .times(1)
            .returning(|_, _, _| Ok(WagerReceipt { new_balance: 0 }));
        let mut haptics = MockHaptics::new();
        haptics.expect_impact().times(1).return_const(());
        haptics.expect_outcome().times(1).return_const(());

        let mut store = store_with_balance(MIN_STAKE);
        transaction(client, haptics)
            .place(&mut store, red_on_event_one())
            .await;

        assert_eq!(store.profile.balance, 0);
    }

    #[tokio::test]
    async fn test_failed_wager_keeps_balance_and_clears_flag() {
        let mut client = MockLedgerApi::new();
        client
            .expect_submit_wager()
            .times(1)
            .returning(|_, _, _| Err(Error::ledger("event closed")));
        let mut haptics = MockHaptics::new();
        haptics.expect_impact().times(1).return_const(());
        haptics
            .expect_outcome()
            .times(1)
            .withf(|success| !*success)
            .return_const(());

        let mut store = store_with_balance(500);
        transaction(client, haptics)
            .place(&mut store, red_on_event_one())
            .await;

        assert_eq!(store.profile.balance, 500);
        assert!(!store.session.wager_in_flight);
        let notification = store.session.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Error);
    }

    #[tokio::test]
    async fn test_attempt_while_in_flight_is_ignored() {
        let mut client = MockLedgerApi::new();
        client.expect_submit_wager().never();
        let mut haptics = MockHaptics::new();
        haptics.expect_impact().never();

        let mut store = store_with_balance(500);
        store.reduce(Action::WagerStarted);

        transaction(client, haptics)
            .place(&mut store, red_on_event_one())
            .await;

        // The outstanding wager still owns the flag.
        assert!(store.session.wager_in_flight);
        assert_eq!(store.profile.balance, 500);
    }
}
