//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the simulation, the renderer and the input mapping alike.
//!
//! # Coordinates
//!
//! Cells are addressed as `(row, column)` with row increasing downward.
//! Rows above the grid (negative row) are valid spawn space for a piece but
//! never hold settled cells.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 20 | Grid rows |
//! | `DEFAULT_COLUMNS` | 10 | Grid columns |
//! | `MAX_ROWS` | 200 | Largest accepted grid height |
//! | `MAX_COLUMNS` | 200 | Largest accepted grid width |
//! | `DEFAULT_WIDTH` | 300 | Display width in pixels |
//! | `DEFAULT_HEIGHT` | 600 | Display height in pixels |
//! | `DROP_INTERVAL_MS` | 1000 | Automatic descent interval |
//! | `CLOCK_RESOLUTION_MS` | 100 | Elapsed-time clock resolution |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, GameStatus, PieceKind, DEFAULT_COLUMNS, DEFAULT_ROWS};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(Color::Purple.as_str(), "purple");
//! assert!(GameStatus::Running.is_active());
//! assert_eq!((DEFAULT_ROWS, DEFAULT_COLUMNS), (20, 10));
//! ```

/// Default grid rows
pub const DEFAULT_ROWS: u16 = 20;

/// Default grid columns
pub const DEFAULT_COLUMNS: u16 = 10;

/// Largest grid height a session accepts
pub const MAX_ROWS: u16 = 200;

/// Largest grid width a session accepts
pub const MAX_COLUMNS: u16 = 200;

/// Default display width in pixels (display only)
pub const DEFAULT_WIDTH: u32 = 300;

/// Default display height in pixels (display only)
pub const DEFAULT_HEIGHT: u32 = 600;

/// Automatic descent interval (one row per second)
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Resolution of the elapsed-time clock
pub const CLOCK_RESOLUTION_MS: u32 = 100;

/// The seven piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    J,
    O,
    S,
    L,
    I,
    Z,
}

impl PieceKind {
    /// All kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::J,
        PieceKind::O,
        PieceKind::S,
        PieceKind::L,
        PieceKind::I,
        PieceKind::Z,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "t",
            PieceKind::J => "j",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::L => "l",
            PieceKind::I => "i",
            PieceKind::Z => "z",
        }
    }
}

/// Color tag stored in an occupied cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Purple,
    Blue,
    Yellow,
    Green,
    Orange,
    Cyan,
    Red,
}

impl Color {
    /// CSS-style color name
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Purple => "purple",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Orange => "orange",
            Color::Cyan => "cyan",
            Color::Red => "red",
        }
    }
}

/// Cell on the board (None = empty, Some = occupied with a color tag)
pub type Cell = Option<Color>;

/// Translation direction for the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// `(row, column)` delta of a one-cell step.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

/// Rotation direction (quarter turn)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotateDirection {
    Left,
    #[default]
    Right,
}

/// Session lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Init,
    Running,
    Paused,
    Ended,
}

impl GameStatus {
    /// A game is in progress (running or paused).
    pub fn is_active(&self) -> bool {
        matches!(self, GameStatus::Running | GameStatus::Paused)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Init => "init",
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::Ended => "ended",
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game actions produced by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveDown,
    RotateRight,
    RotateLeft,
    Pause,
    Start,
}
