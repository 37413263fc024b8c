//! Terminal input mapping.
//!
//! Maps `crossterm` key events onto [`GameAction`]s. No game rules live
//! here; the engine decides what each action means in the current state.

pub mod map;

pub use blockfall_types as types;

pub use map::{action_for_key, should_quit};
