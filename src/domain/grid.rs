//! Character grid, rectangles and the grid text format.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::error::{DomainError, DomainResult};

/// Box corner marker.
pub const CORNER: char = '+';
/// Marker for top and bottom edges.
pub const HORIZONTAL: char = '-';
/// Marker for left and right edges.
pub const VERTICAL: char = '|';
/// Stamped onto a scratch grid over boxes that were already discovered.
pub const CLAIMED: char = '#';
/// Content of a freshly created grid.
pub const EMPTY: char = ' ';

/// Closed rectangle `[top, bottom] x [left, right]` in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl Rect {
    pub fn new(top: usize, left: usize, bottom: usize, right: usize) -> Self {
        debug_assert!(top <= bottom && left <= right, "inverted rect");
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// True if `other` lies inside the open interior of `self`,
    /// i.e. strictly between its borders.
    pub fn strictly_contains(&self, other: &Rect) -> bool {
        other.top > self.top
            && other.left > self.left
            && other.bottom < self.bottom
            && other.right < self.right
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.top <= other.bottom
            && other.top <= self.bottom
            && self.left <= other.right
            && other.left <= self.right
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.top, self.left, self.bottom, self.right
        )
    }
}

/// How the parser treats rows and row counts that fall short of the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowPolicy {
    /// Short rows and missing rows are errors.
    #[default]
    Strict,
    /// Missing cells keep the empty sentinel.
    Pad,
}

impl FromStr for RowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "pad" => Ok(Self::Pad),
            other => Err(format!(
                "invalid row policy '{}', expected 'strict' or 'pad'",
                other
            )),
        }
    }
}

impl fmt::Display for RowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Pad => write!(f, "pad"),
        }
    }
}

/// Fixed-size, row-major character grid.
///
/// Indexing is `(row, col)` with `row < height` and `col < width`.
/// Out-of-range access panics: every caller derives its indices from
/// the grid's own bounds, so a bad index is a bug, not bad input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Create a grid filled with [`EMPTY`].
    pub fn new(height: usize, width: usize) -> DomainResult<Self> {
        let len = cell_count(height, width)?;
        Ok(Self {
            height,
            width,
            cells: vec![EMPTY; len],
        })
    }

    /// Build a grid from equally long rows.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> DomainResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        let mut grid = Self::new(height, width)?;
        for (row, line) in rows.iter().enumerate() {
            check_row_width(row, line.as_ref(), width, RowPolicy::Strict)?;
            grid.write_row(row, line.as_ref());
        }
        Ok(grid)
    }

    /// Parse the grid text format: a `height width` header line followed by
    /// `height` rows of `width` characters.
    ///
    /// Dimensions and rows are validated before any cell is allocated.
    pub fn parse(content: &str, policy: RowPolicy) -> DomainResult<Self> {
        let mut lines = content.lines().skip_while(|l| l.trim().is_empty());
        let header = lines.next().unwrap_or_default();
        let (height, width) = parse_header(header)?;
        cell_count(height, width)?;

        let rows: Vec<&str> = lines.by_ref().take(height).collect();
        for (row, line) in rows.iter().enumerate() {
            check_row_width(row, line, width, policy)?;
        }

        if rows.len() < height {
            match policy {
                RowPolicy::Strict => {
                    return Err(DomainError::MissingRows {
                        expected: height,
                        found: rows.len(),
                    })
                }
                RowPolicy::Pad => warn!(
                    "found {} of {} rows, padding with empty rows",
                    rows.len(),
                    height
                ),
            }
        }

        let trailing = lines.filter(|l| !l.trim().is_empty()).count();
        if trailing > 0 {
            debug!("ignoring {} trailing lines after grid", trailing);
        }

        let mut grid = Self::new(height, width)?;
        for (row, line) in rows.iter().enumerate() {
            grid.write_row(row, line);
        }
        Ok(grid)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// The rectangle covering the whole grid.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.height - 1, self.width - 1)
    }

    pub fn get(&self, row: usize, col: usize) -> char {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, ch: char) {
        let idx = self.index(row, col);
        self.cells[idx] = ch;
    }

    /// Set every cell of the closed rectangle to `ch`.
    pub fn fill_rect(&mut self, rect: Rect, ch: char) {
        for row in rect.top..=rect.bottom {
            for col in rect.left..=rect.right {
                self.set(row, col, ch);
            }
        }
    }

    /// Row contents as a string.
    pub fn row(&self, row: usize) -> String {
        let start = self.index(row, 0);
        self.cells[start..start + self.width].iter().collect()
    }

    fn write_row(&mut self, row: usize, line: &str) {
        for (col, ch) in line.chars().enumerate() {
            self.set(row, col, ch);
        }
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "grid access ({}, {}) outside {}x{}",
            row,
            col,
            self.height,
            self.width
        );
        row * self.width + col
    }
}

/// Writes `height` lines of exactly `width` characters.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            writeln!(f, "{}", self.row(row))?;
        }
        Ok(())
    }
}

/// Number of cells of a `height` x `width` grid.
fn cell_count(height: usize, width: usize) -> DomainResult<usize> {
    if height == 0 || width == 0 {
        return Err(DomainError::ZeroDimension { height, width });
    }
    height
        .checked_mul(width)
        .filter(|&len| len <= isize::MAX as usize / std::mem::size_of::<char>())
        .ok_or(DomainError::GridTooLarge { height, width })
}

/// Rows longer than `width` always fail; shorter rows fail unless padding.
fn check_row_width(row: usize, line: &str, width: usize, policy: RowPolicy) -> DomainResult<()> {
    let found = line.chars().count();
    if found > width {
        return Err(DomainError::RowTooLong {
            row,
            expected: width,
            found,
        });
    }
    if found < width {
        match policy {
            RowPolicy::Strict => {
                return Err(DomainError::ShortRow {
                    row,
                    expected: width,
                    found,
                })
            }
            RowPolicy::Pad => warn!("row {} has {} of {} cells, padding", row, found, width),
        }
    }
    Ok(())
}

fn parse_header(header: &str) -> DomainResult<(usize, usize)> {
    let malformed = || DomainError::MalformedHeader {
        header: header.to_string(),
    };
    let mut parts = header.split_whitespace();
    let height = parts.next().ok_or_else(malformed)?;
    let width = parts.next().ok_or_else(malformed)?;
    if parts.next().is_some() {
        return Err(malformed());
    }
    let height = height.parse::<usize>().map_err(|_| malformed())?;
    let width = width.parse::<usize>().map_err(|_| malformed())?;
    Ok((height, width))
}
