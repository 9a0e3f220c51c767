//! Toolchain configuration
//!
//! Program names for the external tools the wizard drives. Each one can be
//! overridden through an environment variable, e.g. to point at a
//! `composer.phar` or a containerized PHP.

use std::path::{Path, PathBuf};

/// External programs invoked by the installer and the checkpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub composer: String,
    pub php: String,
    pub npm: String,
    pub git: String,
}

impl Toolchain {
    pub const COMPOSER_ENV: &'static str = "STARTER_COMPOSER";
    pub const PHP_ENV: &'static str = "STARTER_PHP";
    pub const NPM_ENV: &'static str = "STARTER_NPM";
    pub const GIT_ENV: &'static str = "STARTER_GIT";

    /// Build from the environment, falling back to the defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let pick = |key: &str, fallback: String| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(fallback)
        };

        Self {
            composer: pick(Self::COMPOSER_ENV, defaults.composer),
            php: pick(Self::PHP_ENV, defaults.php),
            npm: pick(Self::NPM_ENV, defaults.npm),
            git: pick(Self::GIT_ENV, defaults.git),
        }
    }
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            composer: "composer".to_string(),
            php: "php".to_string(),
            npm: "npm".to_string(),
            git: "git".to_string(),
        }
    }
}

/// Settings for one wizard run
#[derive(Debug, Clone)]
pub struct SetupConfig {
    /// Root of the Laravel project being configured
    pub project_root: PathBuf,
    pub toolchain: Toolchain,
    /// Compute and display everything, execute nothing
    pub dry_run: bool,
    /// Accept every default without prompting
    pub assume_defaults: bool,
}

impl SetupConfig {
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            project_root: project_root.as_ref().to_path_buf(),
            toolchain: Toolchain::from_env(),
            dry_run: false,
            assume_defaults: false,
        }
    }
}
