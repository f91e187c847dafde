//! Box hierarchy discovery.

use termtree::Tree;
use tracing::{debug, instrument, trace};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::grid::{Grid, Rect, CLAIMED};
use crate::domain::locator::find_box_at;
use crate::domain::validator::is_valid;

/// A box and the boxes nested directly inside it.
///
/// Children are kept in discovery order, which is the row-major order of
/// their top-left corners inside the parent's interior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxTree {
    rect: Rect,
    children: Vec<BoxTree>,
}

impl BoxTree {
    pub fn new(rect: Rect, children: Vec<BoxTree>) -> Self {
        Self { rect, children }
    }

    /// Discover the full hierarchy of `grid`.
    ///
    /// The grid border itself must be a valid box; it becomes the root.
    #[instrument(level = "debug", skip(grid), fields(height = grid.height(), width = grid.width()))]
    pub fn build(grid: &Grid) -> DomainResult<Self> {
        let root = grid.bounds();
        if !is_valid(grid, &root) {
            return Err(DomainError::RootNotFound(root));
        }
        let children = find_children(grid, &root, true)?;
        debug!("root {} has {} direct children", root, children.len());
        Ok(Self::new(root, children))
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn children(&self) -> &[BoxTree] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of boxes in this subtree, including this one.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(BoxTree::len).sum::<usize>()
    }

    /// Number of nesting levels; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(BoxTree::depth).max().unwrap_or(0)
    }

    /// Pre-order traversal yielding `(depth, node)`, root at depth 0.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BoxTree)> {
        let mut stack = vec![(0, self)];
        std::iter::from_fn(move || {
            let (depth, node) = stack.pop()?;
            stack.extend(node.children.iter().rev().map(|c| (depth + 1, c)));
            Some((depth, node))
        })
    }

    pub fn to_termtree(&self) -> Tree<String> {
        let leaves: Vec<_> = self.children.iter().map(|c| c.to_termtree()).collect();
        Tree::new(self.rect.to_string()).with_leaves(leaves)
    }
}

/// Find the boxes nested directly inside `parent`.
///
/// Scans the open interior of `parent` row by row on a private copy of
/// `grid`. Every box found is stamped with [`CLAIMED`] on that copy, so its
/// border and interior cannot start another match later in the scan.
/// With `recursive`, each child's own children are discovered against the
/// unmarked `grid`.
///
/// The copy is full-grid sized and stays alive across the recursive call,
/// so a chain of `d` nested boxes holds `d` copies at once: memory grows
/// as `O(d * height * width)`.
pub fn find_children(grid: &Grid, parent: &Rect, recursive: bool) -> DomainResult<Vec<BoxTree>> {
    let mut mark_map = grid.clone();
    let mut children = Vec::new();

    for row in parent.top + 1..parent.bottom {
        for col in parent.left + 1..parent.right {
            let Some(found) = find_box_at(&mark_map, row, col) else {
                continue;
            };
            if found.top != row || found.left != col {
                return Err(DomainError::LocatorContract { row, col, found });
            }

            mark_map.fill_rect(found, CLAIMED);
            debug!("found box {} inside {}", found, parent);
            trace!("mark map:\n{}", mark_map);

            let nested = if recursive {
                find_children(grid, &found, true)?
            } else {
                Vec::new()
            };
            children.push(BoxTree::new(found, nested));
        }
    }

    Ok(children)
}
