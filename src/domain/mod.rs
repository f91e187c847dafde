//! Domain layer: grid model and box detection
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod grid;
pub mod locator;
pub mod render;
pub mod tree;
pub mod validator;

pub use error::{DomainError, DomainResult};
pub use grid::{Grid, Rect, RowPolicy, CLAIMED, CORNER, EMPTY, HORIZONTAL, VERTICAL};
pub use locator::find_box_at;
pub use render::{render, render_tree, DepthMarks};
pub use tree::{find_children, BoxTree};
pub use validator::{is_valid, is_zero_sized};
