//! Terminal rendering for the falling-block game.
//!
//! The session snapshot is drawn into an in-memory framebuffer by
//! [`GameView`] (pure, unit-testable) and flushed to the terminal by
//! [`TerminalRenderer`], which only rewrites cells that changed.
//!
//! Each grid cell is two characters wide to compensate for the typical
//! terminal glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
