use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::infrastructure::traits::FileSystem;
use crate::infrastructure::{InfraError, InfraResult};

/// Extension of grid source files found when a directory is given.
pub const SOURCE_EXTENSION: &str = "txt";

pub trait PathExt {
    fn is_grid_source(&self) -> bool;
}

impl PathExt for Path {
    fn is_grid_source(&self) -> bool {
        self.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
    }
}

/// Expand directories to the grid sources beneath them.
///
/// Anything `fs` does not report as a directory is passed through untouched
/// and keeps its position; each directory is replaced by its `*.txt` files,
/// sorted by path.
pub fn expand_sources(fs: &dyn FileSystem, paths: &[PathBuf]) -> InfraResult<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for path in paths {
        if !fs.is_dir(path) {
            sources.push(path.clone());
            continue;
        }
        let mut found = Vec::new();
        for entry in WalkDir::new(path) {
            let entry = entry
                .map_err(|e| InfraError::io(format!("scan {}", path.display()), e.into()))?;
            if entry.file_type().is_file() && entry.path().is_grid_source() {
                found.push(entry.into_path());
            }
        }
        found.sort();
        debug!("expand_sources: {} -> {} files", path.display(), found.len());
        sources.extend(found);
    }
    Ok(sources)
}

