//! Terminal presentation layer: framebuffer, renderer, and game view.
//!
//! Everything here is a thin consumer of the core engine's accessors; no
//! game rules.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{kind_color, GameView, Viewport};
pub use renderer::TerminalRenderer;
