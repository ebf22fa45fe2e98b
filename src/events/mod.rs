//! Event handling for Punter.
//!
//! This module provides input event handling for the terminal surface:
//! key presses are translated into [`Action`](crate::state::Action)s.

mod handler;
mod input;

pub use handler::EventHandler;
pub use input::{InputEvent, Key, Modifiers};
