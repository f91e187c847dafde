//! Depth-annotated re-rendering of a box hierarchy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainResult;
use crate::domain::grid::{Grid, CORNER, HORIZONTAL, VERTICAL};
use crate::domain::tree::BoxTree;

const SYMBOLIC_FILL: [char; 4] = ['#', '=', '-', '.'];

/// Fill characters used for box interiors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthMarks {
    /// `#`, `=`, `-`, `.`, repeating from depth 4 on.
    #[default]
    Symbolic,
    /// The last decimal digit of the depth.
    Numeric,
}

impl DepthMarks {
    pub fn fill_char(self, depth: usize) -> char {
        match self {
            Self::Symbolic => SYMBOLIC_FILL[depth % SYMBOLIC_FILL.len()],
            Self::Numeric => char::from(b'0' + (depth % 10) as u8),
        }
    }
}

impl FromStr for DepthMarks {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "symbolic" => Ok(Self::Symbolic),
            "numeric" => Ok(Self::Numeric),
            other => Err(format!(
                "invalid depth marks '{}', expected 'symbolic' or 'numeric'",
                other
            )),
        }
    }
}

impl fmt::Display for DepthMarks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbolic => write!(f, "symbolic"),
            Self::Numeric => write!(f, "numeric"),
        }
    }
}

/// Draw `tree` onto `output`, starting at nesting level `depth`.
///
/// Each box gets a clean border and an interior completely filled with its
/// depth character; children are drawn afterwards, on top of that fill.
pub fn render(output: &mut Grid, tree: &BoxTree, depth: usize, marks: DepthMarks) {
    let rect = *tree.rect();

    output.fill_rect(rect, marks.fill_char(depth));
    for row in rect.top..=rect.bottom {
        output.set(row, rect.left, VERTICAL);
        output.set(row, rect.right, VERTICAL);
    }
    for col in rect.left..=rect.right {
        output.set(rect.top, col, HORIZONTAL);
        output.set(rect.bottom, col, HORIZONTAL);
    }
    for (row, col) in [
        (rect.top, rect.left),
        (rect.top, rect.right),
        (rect.bottom, rect.left),
        (rect.bottom, rect.right),
    ] {
        output.set(row, col, CORNER);
    }

    for child in tree.children() {
        render(output, child, depth + 1, marks);
    }
}

/// Render `tree` into a fresh `height` x `width` grid.
pub fn render_tree(
    tree: &BoxTree,
    height: usize,
    width: usize,
    marks: DepthMarks,
) -> DomainResult<Grid> {
    let mut output = Grid::new(height, width)?;
    render(&mut output, tree, 0, marks);
    Ok(output)
}
