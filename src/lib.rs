//! # Punter - Prediction Market Mini-App Client
//!
//! A terminal client session for a points-based prediction market. The user
//! spends a point balance to back outcomes of published events, watches a
//! leaderboard, and reviews settlement history. Local state is kept consistent
//! with a remote authoritative ledger: reads are best-effort and tolerate
//! staleness, writes are confirm-then-apply and never drift from the server.
//!
//! ## Architecture
//!
//! - **App**: Core application state and lifecycle management
//! - **UI**: Layout and rendering logic
//! - **API**: Ledger service integration layer
//! - **State**: Centralized session state management
//! - **Sync**: Tab-driven data synchronization
//! - **Wager**: The single write transaction against the ledger
//! - **Events**: Input handling and event processing
//! - **Config**: Configuration management

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod state;
pub mod sync;
pub mod ui;
pub mod wager;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
pub use sync::DataSyncController;
pub use wager::{MIN_STAKE, WagerTransaction};
