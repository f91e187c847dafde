//! Structural box validation.

use crate::domain::grid::{Grid, Rect, CORNER, HORIZONTAL, VERTICAL};

/// A rect that collapses to a line or a point is never a box.
pub fn is_zero_sized(rect: &Rect) -> bool {
    rect.top == rect.bottom || rect.left == rect.right
}

/// Check whether `rect` is drawn as a box on `grid`.
///
/// Only the top-left and bottom-right corners are checked for [`CORNER`];
/// the top-right and bottom-left corners and the interior are not inspected.
pub fn is_valid(grid: &Grid, rect: &Rect) -> bool {
    if is_zero_sized(rect) {
        return false;
    }
    if grid.get(rect.top, rect.left) != CORNER || grid.get(rect.bottom, rect.right) != CORNER {
        return false;
    }
    let vertical_edges = (rect.top + 1..rect.bottom).all(|row| {
        grid.get(row, rect.left) == VERTICAL && grid.get(row, rect.right) == VERTICAL
    });
    if !vertical_edges {
        return false;
    }
    (rect.left + 1..rect.right).all(|col| {
        grid.get(rect.top, col) == HORIZONTAL && grid.get(rect.bottom, col) == HORIZONTAL
    })
}
