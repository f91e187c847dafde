//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/boxnest/boxnest.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `BOXNEST_*` prefix
//! 5. Command line flags (applied by the CLI via [`Settings::merge_with`])

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{DepthMarks, RowPolicy};

/// Unified configuration for boxnest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Print the input grid and the box hierarchy along with the rendering
    pub verbose: bool,
    /// Fill characters for rendered box interiors
    pub depth_marks: DepthMarks,
    /// Handling of short rows and missing rows in grid sources
    pub short_rows: RowPolicy,
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub verbose: Option<bool>,
    pub depth_marks: Option<DepthMarks>,
    pub short_rows: Option<RowPolicy>,
}

/// Get the XDG config directory for boxnest.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "boxnest").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("boxnest.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
pub fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay onto self: specified overlay values win.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            verbose: overlay.verbose.unwrap_or(self.verbose),
            depth_marks: overlay.depth_marks.unwrap_or(self.depth_marks),
            short_rows: overlay.short_rows.unwrap_or(self.short_rows),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            current = current.merge_with(&load_raw_settings(path)?);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply BOXNEST_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("BOXNEST")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_bool("verbose") {
            settings.verbose = val;
        }
        if let Ok(val) = config.get_string("depth_marks") {
            settings.depth_marks = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Ok(val) = config.get_string("short_rows") {
            settings.short_rows = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# boxnest configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/boxnest/boxnest.toml
#   File:   --config <FILE>
#   Env:    BOXNEST_* environment variables
#   Flags:  --verbose, --marks, --short-rows

# Print the input grid and the discovered hierarchy before each rendering
# verbose = false

# Interior fill per depth: "symbolic" (# = - .) or "numeric" (0-9)
# depth_marks = "symbolic"

# Rows shorter than the header width, or missing rows:
#   "strict" rejects the source, "pad" fills with blanks
# short_rows = "strict"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
