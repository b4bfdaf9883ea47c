//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the falling-block rules and the session state machine.
//! It has no dependency on terminals, key events or wall-clock time:
//!
//! - **Deterministic**: a seed fixes the piece sequence
//! - **Testable**: timers are advanced explicitly by the caller
//! - **Portable**: any front end drives it through [`Session`]
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven piece layouts, colors and rotation rules
//! - [`collision`]: placement legality against bounds and settled cells
//! - [`piece`]: the active piece with move/rotate
//! - [`board`]: the settled grid with merge and row clearing
//! - [`session`]: lifecycle, spawning, scoring and game over
//! - [`timer`]: descent timer and elapsed-time clock
//! - [`config`]: session dimensions and environment overrides
//!
//! # Rules
//!
//! - Pieces spawn at row 0, column `columns / 2 - 2`, chosen uniformly at random
//! - A blocked downward move settles the piece immediately (no lock delay)
//! - Clearing `n` rows at once scores `n²`
//! - The game ends when a freshly spawned piece does not fit
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Session, SessionConfig};
//! use blockfall_types::{GameAction, GameStatus};
//!
//! let mut session = Session::new(SessionConfig::default(), 12345);
//! session.start().unwrap();
//!
//! session.apply_action(GameAction::MoveRight);
//! session.apply_action(GameAction::RotateRight);
//! session.advance(1000); // one automatic descent
//!
//! assert_eq!(session.status(), GameStatus::Running);
//! assert_eq!(session.active().unwrap().top(), 1);
//! ```

pub mod board;
pub mod collision;
pub mod config;
pub mod error;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;
pub mod timer;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::fits;
pub use config::SessionConfig;
pub use error::{ConfigError, SessionError};
pub use piece::{MoveOutcome, Piece};
pub use rng::PieceRandomizer;
pub use scoring::line_clear_score;
pub use session::{Session, SessionEvent};
pub use shapes::{rotate_shape, spawn_shape, RotationRule, Shape};
pub use snapshot::{ActiveSnapshot, SessionSnapshot};
pub use timer::{format_elapsed, Clock, IntervalTimer};
