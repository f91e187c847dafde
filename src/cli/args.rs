//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::domain::{DepthMarks, RowPolicy};

/// Discover nested ASCII boxes in a character grid and re-render them by depth
#[derive(Parser, Debug)]
#[command(name = "boxnest")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log level (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Print the input grid and the box hierarchy with each rendering
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Interior fill characters: symbolic or numeric
    #[arg(long, global = true, value_name = "MARKS")]
    pub marks: Option<DepthMarks>,

    /// Short rows and missing rows: strict or pad
    #[arg(long, global = true, value_name = "POLICY")]
    pub short_rows: Option<RowPolicy>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render each source with depth-annotated box interiors
    Render {
        /// Grid files, or directories of *.txt grid files
        #[arg(required = true, value_hint = ValueHint::AnyPath)]
        sources: Vec<PathBuf>,
        /// Write `<stem>.out.txt` files here instead of stdout
        #[arg(short, long, value_hint = ValueHint::DirPath)]
        output_dir: Option<PathBuf>,
    },

    /// Show the box hierarchy of each source as a tree
    Tree {
        /// Grid files, or directories of *.txt grid files
        #[arg(required = true, value_hint = ValueHint::AnyPath)]
        sources: Vec<PathBuf>,
    },

    /// Validate sources and report box counts
    Check {
        /// Grid files, or directories of *.txt grid files
        #[arg(required = true, value_hint = ValueHint::AnyPath)]
        sources: Vec<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Show global config file location
    Path,
    /// Print a commented config template
    Template,
}
