//! Wire formats and data conversion for ledger responses.

use crate::error::{Error, Result};
use crate::state::MarketEvent;
use serde::{Deserialize, Serialize};

use super::client::{UserAccount, WagerReceipt};

/// Wire shape of the user record.
#[derive(Debug, Deserialize)]
pub struct UserDto {
    pub user_id: u64,
    pub balance: u64,
}

/// Wire body of a wager submission.
#[derive(Debug, Serialize)]
pub struct WagerSubmission {
    pub user_id: u64,
    pub event_id: u32,
    pub option_id: u32,
}

/// Wire shape of a wager response.
///
/// The ledger reports rejection in-band: `status = "error"` on an otherwise
/// successful HTTP exchange, with `new_balance` absent.
#[derive(Debug, Deserialize)]
pub struct WagerResponseDto {
    pub status: String,
    #[serde(default)]
    pub new_balance: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Converts ledger wire payloads to internal state types.
pub struct DataConverter;

impl DataConverter {
    /// Convert the user record.
    pub fn convert_user(dto: UserDto) -> UserAccount {
        UserAccount {
            user_id: dto.user_id,
            balance: dto.balance,
        }
    }

    /// Sanitize a fetched event list. An event without options is not
    /// backable and is dropped so the stored list upholds the non-empty
    /// options invariant.
    pub fn convert_events(events: Vec<MarketEvent>) -> Vec<MarketEvent> {
        events
            .into_iter()
            .filter(|event| {
                if event.options.is_empty() {
                    tracing::warn!(event_id = event.id, "dropping event without options");
                    false
                } else {
                    true
                }
            })
            .collect()
    }

    /// Map a wager response to a receipt or a rejection.
    pub fn convert_wager_response(dto: WagerResponseDto) -> Result<WagerReceipt> {
        match (dto.status.as_str(), dto.new_balance) {
            ("success", Some(new_balance)) => Ok(WagerReceipt { new_balance }),
            _ => Err(Error::ledger(
                dto.message.unwrap_or_else(|| "wager rejected".to_string()),
            )),
        }
    }
}
