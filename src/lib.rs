//! boxnest: discover nested ASCII boxes in a character grid.
//!
//! A grid such as
//!
//! ```text
//! +-------+
//! |+-+ +-+|
//! || | | ||
//! |+-+ +-+|
//! +-------+
//! ```
//!
//! is parsed into a [`domain::BoxTree`] whose root is the grid border and
//! whose children are the boxes nested inside it, then re-rendered with each
//! interior filled by a depth-dependent character.
//!
//! Layers:
//! - [`domain`]: grid model, box detection and rendering (no I/O)
//! - [`application`]: per-source processing service
//! - [`infrastructure`]: filesystem boundary and service wiring
//! - [`cli`]: argument parsing, dispatch and terminal output

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
