//! Box discovery service
//!
//! Runs one grid source through load → discover → render.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{render_tree, BoxTree, Grid};
use crate::infrastructure::traits::FileSystem;

/// Suffix for rendered files written to an output directory.
pub const OUTPUT_SUFFIX: &str = "out.txt";

/// Grid and hierarchy discovered in one source.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Where the grid was read from
    pub path: PathBuf,
    /// The parsed input grid
    pub input: Grid,
    /// Box hierarchy rooted at the grid border
    pub tree: BoxTree,
}

/// Fully processed source, ready to be written.
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub analysis: Analysis,
    /// Depth-annotated rendering, same size as the input
    pub rendered: Grid,
}

/// Service for discovering and rendering nested boxes.
pub struct BoxService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl BoxService {
    /// Create a new box service.
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Read and parse a grid source.
    pub fn load(&self, path: &Path) -> ApplicationResult<Grid> {
        if !self.fs.exists(path) {
            return Err(ApplicationError::OperationFailed {
                context: format!("grid source not found: {}", path.display()),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "file does not exist",
                )),
            });
        }
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read grid", path)?;
        let grid = Grid::parse(&content, self.settings.short_rows)
            .map_err(|e| ApplicationError::in_source(path, e))?;
        debug!(
            "load: {} is {}x{}",
            path.display(),
            grid.height(),
            grid.width()
        );
        Ok(grid)
    }

    /// Load a source and discover its box hierarchy.
    #[instrument(level = "debug", skip(self))]
    pub fn analyze(&self, path: &Path) -> ApplicationResult<Analysis> {
        let input = self.load(path)?;
        let tree = BoxTree::build(&input).map_err(|e| ApplicationError::in_source(path, e))?;
        info!(
            "{}: {} boxes, depth {}",
            path.display(),
            tree.len(),
            tree.depth()
        );
        Ok(Analysis {
            path: path.to_path_buf(),
            input,
            tree,
        })
    }

    /// Load, discover and render one source.
    pub fn process(&self, path: &Path) -> ApplicationResult<SourceReport> {
        let analysis = self.analyze(path)?;
        let rendered = render_tree(
            &analysis.tree,
            analysis.input.height(),
            analysis.input.width(),
            self.settings.depth_marks,
        )
        .map_err(|e| ApplicationError::in_source(path, e))?;
        Ok(SourceReport { analysis, rendered })
    }

    /// Write a rendered grid to `<output_dir>/<stem>.out.txt`.
    pub fn write_rendered(
        &self,
        report: &SourceReport,
        output_dir: &Path,
    ) -> ApplicationResult<PathBuf> {
        self.fs
            .create_dir_all(output_dir)
            .with_path_context("create output directory", output_dir)?;
        let stem = report
            .analysis
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "grid".to_string());
        let target = output_dir.join(format!("{}.{}", stem, OUTPUT_SUFFIX));
        self.fs
            .write(&target, &report.rendered.to_string())
            .with_path_context("write rendered grid", &target)?;
        debug!("write_rendered: {}", target.display());
        Ok(target)
    }
}
