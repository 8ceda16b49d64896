//! Project context resolution for seam.
//!
//! This module provides the "environment resolution" layer that turns a
//! project root (the current working directory by default, or an explicit
//! `--root` override) plus the optional `seam.yaml` into the absolute
//! paths every command operates on.
//!
//! All seam commands go through this module to locate the templates root
//! and the output root, so path handling stays in one place.

use crate::config::Config;
use crate::error::{Result, SeamError};
use std::env;
use std::path::{Path, PathBuf};

/// Name of the optional config file at the project root.
pub const CONFIG_FILE: &str = "seam.yaml";

fn current_dir() -> Result<PathBuf> {
    env::current_dir().map_err(|e| {
        SeamError::UserError(format!("failed to get current working directory: {}", e))
    })
}

/// Resolved paths for one seam invocation.
///
/// All paths are absolute except where noted.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Absolute path to the project root.
    pub root: PathBuf,

    /// Absolute path to the templates root (`{root}/{config.templates_dir}`).
    pub templates_dir: PathBuf,

    /// Absolute path to the output root (`{root}/{config.output_dir}`).
    pub output_dir: PathBuf,

    /// The effective configuration (file contents or defaults).
    pub config: Config,
}

impl ProjectContext {
    /// Resolve the project context.
    ///
    /// Uses `root` when given, otherwise the current working directory.
    /// A relative `root` is resolved against the current working directory
    /// so the context always carries absolute paths.
    /// Loads `seam.yaml` from the root when present; defaults otherwise.
    ///
    /// # Returns
    ///
    /// * `Ok(ProjectContext)` - Successfully resolved context
    /// * `Err(SeamError::UserError)` - Root does not exist or config is invalid
    pub fn resolve(root: Option<&Path>) -> Result<Self> {
        let root = match root {
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) => current_dir()?.join(path),
            None => current_dir()?,
        };

        if !root.is_dir() {
            return Err(SeamError::UserError(format!(
                "project root '{}' is not a directory",
                root.display()
            )));
        }

        let config_path = root.join(CONFIG_FILE);
        let config = if config_path.is_file() {
            Config::load(&config_path)?
        } else {
            Config::default()
        };

        let templates_dir = root.join(&config.templates_dir);
        let output_dir = root.join(&config.output_dir);

        Ok(Self {
            root,
            templates_dir,
            output_dir,
            config,
        })
    }

    /// Path to a unit's entry file.
    pub fn entry_path(&self, unit_name: &str) -> PathBuf {
        self.templates_dir.join(unit_name).join(&self.config.entry_file)
    }

    /// Path to a unit's output artifact.
    pub fn output_path(&self, unit_name: &str) -> PathBuf {
        self.output_dir.join(unit_name).join(&self.config.output_file)
    }

    /// Render a path relative to the project root for console output.
    ///
    /// Falls back to the full path when it is not under the root.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
