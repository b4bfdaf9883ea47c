//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The session
//! decides whether an action is accepted; this crate only translates keys.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
