//! Core game engine: pure, deterministic, and testable.
//!
//! All game rules live here, with zero dependencies on UI or I/O:
//!
//! - [`board`]: the 10x20 settled-cell grid with row clearing
//! - [`pieces`]: shape tables and the pivot rotation transform
//! - [`rng`]: seedable uniform piece selection
//! - [`scoring`]: clear scores and gravity speed-up
//! - [`game`]: the session state machine tying it all together
//!
//! The engine is driven entirely from outside: a caller applies player
//! actions and calls [`GameSession::tick`] on a timer paced by
//! [`GameSession::fall_interval_ms`]. Every operation is a total, synchronous
//! state transition; nothing here panics or blocks.
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameSession;
//! use blockfall_core::types::GameAction;
//!
//! let mut game = GameSession::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.active().is_none()); // settled; next tick spawns
//! ```

pub mod board;
pub mod game;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use blockfall_types as types;

// Re-export the common surface for convenience.
pub use board::Board;
pub use game::{ActivePiece, GameSession};
pub use pieces::{canonical_shape, rotated, BlockOffset, PieceShape, SPAWN_POSITION};
pub use rng::{PiecePicker, SimpleRng};
pub use scoring::{line_clear_score, next_fall_interval};
