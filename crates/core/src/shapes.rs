//! Shape catalog - the seven piece layouts, their colors and rotation rules
//!
//! Offsets are `(row, column)` pairs relative to the piece origin. Layouts
//! produced by the generic quarter-turn transform are normalized so that the
//! smallest row and column are both 0.

use crate::types::{Color, PieceKind, RotateDirection};

/// Offset of a single cell relative to piece origin, `(row, column)`
pub type Offset = (i32, i32);

/// Shape of a piece - 4 cell offsets from piece origin
pub type Shape = [Offset; 4];

/// Horizontal posture of the bar
pub const BAR_HORIZONTAL: Shape = [(0, 0), (0, 1), (0, 2), (0, 3)];

/// Vertical posture of the bar; pivots around column 1 and reaches one row above the origin
pub const BAR_VERTICAL: Shape = [(-1, 1), (0, 1), (1, 1), (2, 1)];

/// How a piece kind responds to a rotate request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationRule {
    /// Quarter-turn transform followed by normalization
    Transform,
    /// Rotation is a no-op
    Fixed,
    /// Alternates between two precomputed postures
    Toggle { first: Shape, second: Shape },
}

/// Get the spawn layout for a piece kind
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::T => [(0, 0), (0, 1), (0, 2), (1, 1)],
        PieceKind::J => [(0, 0), (0, 1), (0, 2), (1, 2)],
        PieceKind::O => [(0, 0), (0, 1), (1, 0), (1, 1)],
        PieceKind::S => [(0, 1), (0, 2), (1, 0), (1, 1)],
        PieceKind::L => [(0, 0), (0, 1), (0, 2), (1, 0)],
        PieceKind::I => BAR_HORIZONTAL,
        PieceKind::Z => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

/// Color tag written into the board when a piece of this kind settles
pub fn piece_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::T => Color::Purple,
        PieceKind::J => Color::Blue,
        PieceKind::O => Color::Yellow,
        PieceKind::S => Color::Green,
        PieceKind::L => Color::Orange,
        PieceKind::I => Color::Cyan,
        PieceKind::Z => Color::Red,
    }
}

pub fn rotation_rule(kind: PieceKind) -> RotationRule {
    match kind {
        PieceKind::O => RotationRule::Fixed,
        PieceKind::I => RotationRule::Toggle {
            first: BAR_HORIZONTAL,
            second: BAR_VERTICAL,
        },
        _ => RotationRule::Transform,
    }
}

/// Apply a quarter turn to every offset, then normalize.
///
/// Right maps `(r, c)` to `(c, -r)`; left maps `(r, c)` to `(-c, r)`.
pub fn rotate_shape(shape: &Shape, direction: RotateDirection) -> Shape {
    let turned = shape.map(|(row, col)| match direction {
        RotateDirection::Right => (col, -row),
        RotateDirection::Left => (-col, row),
    });
    normalize(&turned)
}

/// Shift a layout so its minimum row and column are 0
pub fn normalize(shape: &Shape) -> Shape {
    let min_row = shape.iter().map(|&(row, _)| row).min().unwrap_or(0);
    let min_col = shape.iter().map(|&(_, col)| col).min().unwrap_or(0);
    shape.map(|(row, col)| (row - min_row, col - min_col))
}

/// Number of columns spanned from the local origin (max column + 1)
pub fn shape_width(shape: &Shape) -> i32 {
    shape.iter().map(|&(_, col)| col).max().unwrap_or(-1) + 1
}

/// Number of rows spanned from the local origin (max row + 1)
pub fn shape_height(shape: &Shape) -> i32 {
    shape.iter().map(|&(row, _)| row).max().unwrap_or(-1) + 1
}
