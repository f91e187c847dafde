//! Box tracing from a candidate top-left corner.

use crate::domain::grid::{Grid, Rect, CORNER, HORIZONTAL, VERTICAL};
use crate::domain::validator::is_valid;

/// Trace the box whose top-left corner is at `(top, left)`.
///
/// The trace walks right along the top edge to the next corner, then down
/// the right edge, and validates the resulting rect. Boxes that touch
/// another box on their top or right edge are not found by this trace.
pub fn find_box_at(grid: &Grid, top: usize, left: usize) -> Option<Rect> {
    if grid.get(top, left) != CORNER {
        return None;
    }

    let mut col = left + 1;
    while col < grid.width() && grid.get(top, col) == HORIZONTAL {
        col += 1;
    }
    if col >= grid.width() || grid.get(top, col) != CORNER {
        return None;
    }

    let mut row = top + 1;
    while row < grid.height() && grid.get(row, col) == VERTICAL {
        row += 1;
    }
    if row >= grid.height() {
        return None;
    }

    let rect = Rect::new(top, left, row, col);
    is_valid(grid, &rect).then_some(rect)
}
