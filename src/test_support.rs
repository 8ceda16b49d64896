//! Shared helpers for tests: scratch project trees and a cwd guard.

use crate::context::{ProjectContext, CONFIG_FILE};
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Changes the process working directory for the guard's lifetime.
pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Write a file, creating parent directories as needed.
pub(crate) fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// A scratch seam project rooted in a temporary directory.
pub(crate) struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// A project with the default templates root already created.
    pub(crate) fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("src/skills")).unwrap();
        Self { dir }
    }

    /// A bare project root with no templates directory at all.
    pub(crate) fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// A project with a `seam.yaml` config file and nothing else.
    pub(crate) fn with_config(yaml: &str) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), yaml).unwrap();
        Self { dir }
    }

    pub(crate) fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Resolve a fresh context for the project.
    pub(crate) fn context(&self) -> ProjectContext {
        ProjectContext::resolve(Some(self.root())).unwrap()
    }

    pub(crate) fn templates_dir(&self) -> PathBuf {
        self.context().templates_dir
    }

    /// Create a unit directory with an entry file holding `content`.
    pub(crate) fn add_unit(&self, name: &str, content: &str) {
        write_file(&self.entry_path(name), content);
    }

    /// Create an include fragment inside a unit directory.
    pub(crate) fn add_fragment(&self, unit: &str, relative_path: &str, content: &str) {
        let base = self.entry_path(unit);
        let dir = base.parent().unwrap();
        write_file(&dir.join(relative_path), content);
    }

    pub(crate) fn entry_path(&self, unit: &str) -> PathBuf {
        self.context().entry_path(unit)
    }

    pub(crate) fn output_path(&self, unit: &str) -> PathBuf {
        self.context().output_path(unit)
    }

    /// Read a unit's output artifact.
    pub(crate) fn read_output(&self, unit: &str) -> String {
        std::fs::read_to_string(self.output_path(unit)).unwrap()
    }
}
