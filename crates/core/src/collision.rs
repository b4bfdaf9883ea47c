//! Collision detection - is a candidate placement legal?

use crate::board::Board;
use crate::shapes::Offset;

/// Test a shape placed with its origin at `(top, left)`.
///
/// Every resulting cell must have a column inside `[0, columns)` and a row
/// below `rows`. Rows above the grid (negative) are spawn space and always
/// free; rows inside the grid must be empty. Out-of-range lookups reject the
/// placement instead of failing.
pub fn fits(shape: &[Offset], top: i32, left: i32, board: &Board) -> bool {
    let rows = board.rows() as i32;
    let columns = board.columns() as i32;

    shape.iter().all(|&(dr, dc)| {
        let (Some(row), Some(column)) = (top.checked_add(dr), left.checked_add(dc)) else {
            return false;
        };
        if column < 0 || column >= columns || row >= rows {
            return false;
        }
        row < 0 || board.is_empty_at(row, column)
    })
}
