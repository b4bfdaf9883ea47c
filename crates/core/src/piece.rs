//! Piece module - the active falling piece
//!
//! A piece is a shape layout plus an absolute board position. Every move and
//! rotation is checked against the board with [`fits`]; rejected requests
//! leave the piece exactly as it was.

use crate::board::Board;
use crate::collision::fits;
use crate::shapes::{
    piece_color, rotate_shape, rotation_rule, shape_height, shape_width, spawn_shape, RotationRule,
    Shape,
};
use crate::types::{Color, Direction, PieceKind, RotateDirection};

/// Result of a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece moved one cell
    Moved,
    /// A sideways move was blocked; nothing changed
    Blocked,
    /// A downward move was blocked; the piece must settle
    Grounded,
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    shape: Shape,
    top: i32,
    left: i32,
    /// Toggle pieces only: currently in the second posture
    toggled: bool,
}

impl Piece {
    /// Create a piece of `kind` in its spawn layout at `(top, left)`
    pub fn new(kind: PieceKind, top: i32, left: i32) -> Self {
        Self {
            kind,
            shape: spawn_shape(kind),
            top,
            left,
            toggled: false,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        piece_color(self.kind)
    }

    /// Local cell layout
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    /// Absolute board cells, recomputed from the position on every call
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .iter()
            .map(move |&(row, col)| (self.top + row, self.left + col))
    }

    pub fn width(&self) -> i32 {
        shape_width(&self.shape)
    }

    pub fn height(&self) -> i32 {
        shape_height(&self.shape)
    }

    /// Whether the piece fits where it currently is
    pub fn fits(&self, board: &Board) -> bool {
        fits(&self.shape, self.top, self.left, board)
    }

    /// Try to move one cell in `direction`.
    ///
    /// A blocked downward move reports [`MoveOutcome::Grounded`]; the caller
    /// owns what happens next.
    pub fn try_move(&mut self, direction: Direction, board: &Board) -> MoveOutcome {
        let (dr, dc) = direction.delta();
        if fits(&self.shape, self.top + dr, self.left + dc, board) {
            self.top += dr;
            self.left += dc;
            return MoveOutcome::Moved;
        }

        match direction {
            Direction::Down => MoveOutcome::Grounded,
            Direction::Left | Direction::Right => MoveOutcome::Blocked,
        }
    }

    /// Try to rotate in place. Returns true if the layout changed.
    pub fn rotate(&mut self, direction: RotateDirection, board: &Board) -> bool {
        match rotation_rule(self.kind) {
            RotationRule::Fixed => false,
            RotationRule::Toggle { first, second } => {
                let target = if self.toggled { first } else { second };
                if !fits(&target, self.top, self.left, board) {
                    return false;
                }
                self.shape = target;
                self.toggled = !self.toggled;
                true
            }
            RotationRule::Transform => {
                let target = rotate_shape(&self.shape, direction);
                if !fits(&target, self.top, self.left, board) {
                    return false;
                }
                self.shape = target;
                true
            }
        }
    }
}
