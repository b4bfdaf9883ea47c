use crate::board::Board;
use crate::config::SessionConfig;
use crate::piece::Piece;
use crate::types::{Color, GameStatus, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub color: Color,
    /// Absolute `(row, column)` cells; rows may be negative above the grid
    pub cells: [(i32, i32); 4],
}

impl From<&Piece> for ActiveSnapshot {
    fn from(piece: &Piece) -> Self {
        let mut cells = [(0, 0); 4];
        for (slot, cell) in cells.iter_mut().zip(piece.cells()) {
            *slot = cell;
        }
        Self {
            kind: piece.kind(),
            color: piece.color(),
            cells,
        }
    }
}

/// Read-only view of a session for renderers
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub status: GameStatus,
    pub board: Board,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub elapsed_ms: u64,
    pub config: SessionConfig,
}

impl SessionSnapshot {
    pub fn rows(&self) -> u16 {
        self.board.rows()
    }

    pub fn columns(&self) -> u16 {
        self.board.columns()
    }

    /// Cell to draw at `(row, column)`: the active piece over the settled grid
    pub fn visible_cell(&self, row: i32, column: i32) -> Option<Color> {
        if let Some(active) = &self.active {
            if active.cells.contains(&(row, column)) {
                return Some(active.color);
            }
        }
        self.board.get(row, column).flatten()
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        let config = SessionConfig::default();
        Self {
            status: GameStatus::Init,
            board: Board::new(config.rows, config.columns),
            active: None,
            score: 0,
            elapsed_ms: 0,
            config,
        }
    }
}
