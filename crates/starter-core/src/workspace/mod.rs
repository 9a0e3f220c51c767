//! Project files touched by the configurators
//!
//! This module provides:
//! - The [`Workspace`] seam for reading, writing and deleting project files
//! - [`LocalWorkspace`], rooted at the Laravel project directory
//! - Structured editors for `.env.example`, `bootstrap/app.php`, PHP config
//!   arrays and route files

pub mod bootstrap;
pub mod env;
pub mod php;
pub mod routes;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

pub use bootstrap::BootstrapFile;
pub use env::EnvFile;
pub use php::PhpConfig;

/// Well-known project paths, relative to the project root
pub mod paths {
    pub const ENV_EXAMPLE: &str = ".env.example";
    pub const BOOTSTRAP_APP: &str = "bootstrap/app.php";
    pub const CORS_CONFIG: &str = "config/cors.php";
    pub const TENANCY_CONFIG: &str = "config/tenancy.php";
    pub const WEB_ROUTES: &str = "routes/web.php";
    pub const API_ROUTES: &str = "routes/api.php";
    pub const VIEWS_DIR: &str = "resources/views";
    pub const JS_DIR: &str = "resources/js";
    pub const CSS_DIR: &str = "resources/css";
    pub const VITE_CONFIG: &str = "vite.config.js";
}

/// File access relative to the project root
pub trait Workspace {
    fn exists(&self, path: &str) -> bool;

    fn read(&self, path: &str) -> Result<String>;

    /// Write a file, creating parent directories
    fn write(&self, path: &str, contents: &str) -> Result<()>;

    /// Delete a file; `Ok(false)` when it did not exist
    fn remove_file(&self, path: &str) -> Result<bool>;

    /// Delete a directory tree; returns the number of files removed
    fn remove_dir(&self, path: &str) -> Result<usize>;
}

/// Read-modify-write of an existing file.
///
/// A missing file is skipped and reported as `Ok(false)`. The file is only
/// written back when `edit` returns new content.
pub fn edit_file<F>(workspace: &dyn Workspace, path: &str, edit: F) -> Result<bool>
where
    F: FnOnce(&str) -> Option<String>,
{
    if !workspace.exists(path) {
        debug!(path, "file absent, skipping edit");
        return Ok(false);
    }
    let current = workspace.read(path)?;
    match edit(&current) {
        Some(updated) if updated != current => {
            workspace.write(path, &updated)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// The project directory on disk
pub struct LocalWorkspace {
    root: PathBuf,
}

impl LocalWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl Workspace for LocalWorkspace {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn read(&self, path: &str) -> Result<String> {
        let full = self.resolve(path);
        fs::read_to_string(&full).with_context(|| format!("Failed to read {}", full.display()))
    }

    fn write(&self, path: &str, contents: &str) -> Result<()> {
        let full = self.resolve(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&full, contents).with_context(|| format!("Failed to write file: {}", full.display()))
    }

    fn remove_file(&self, path: &str) -> Result<bool> {
        let full = self.resolve(path);
        if !full.is_file() {
            return Ok(false);
        }
        fs::remove_file(&full).with_context(|| format!("Failed to delete {}", full.display()))?;
        Ok(true)
    }

    fn remove_dir(&self, path: &str) -> Result<usize> {
        let full = self.resolve(path);
        if !full.is_dir() {
            return Ok(0);
        }
        let files = WalkDir::new(&full)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .count();
        fs::remove_dir_all(&full).with_context(|| format!("Failed to delete {}", full.display()))?;
        debug!(path, files, "removed directory");
        Ok(files)
    }
}
