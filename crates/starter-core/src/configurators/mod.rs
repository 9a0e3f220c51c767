//! Archetype configurators
//!
//! This module provides:
//! - The [`Configurator`] trait implemented once per archetype
//! - [`Context`], the collaborators a configurator drives
//! - Shared provisioning steps (file removal, structured edits, route blocks)
//!
//! A configurator runs an ordered sequence of labeled tasks: bootstrap,
//! trimming, package installation, then template generation. Composite
//! archetypes delegate to the configurators they build on.

mod ai_powered;
mod api;
mod hybrid;
mod mcp;
mod microservice;
mod mobile_backend;
mod saas;
mod web;

pub use ai_powered::{AiPowered, AiProvider};
pub use api::Api;
pub use hybrid::Hybrid;
pub use mcp::Mcp;
pub use microservice::Microservice;
pub use mobile_backend::MobileBackend;
pub use saas::{Billing, Saas, Tenancy};
pub use web::{Frontend, Web};

use crate::catalog::{Archetype, PackageRef};
use crate::installer::PackageInstaller;
use crate::plan::ConfigurationPlan;
use crate::tasks::TaskRunner;
use crate::ui::Prompter;
use crate::workspace::{edit_file, paths, routes, PhpConfig, Workspace};
use anyhow::Result;

/// Collaborators available while configuring
pub struct Context<'a> {
    pub ui: &'a dyn Prompter,
    pub tasks: &'a TaskRunner<'a>,
    pub installer: &'a PackageInstaller<'a>,
    pub workspace: &'a dyn Workspace,
}

/// One archetype's provisioning strategy
pub trait Configurator {
    fn archetype(&self) -> Archetype;

    /// Run the archetype's provisioning sequence
    fn configure(&self, plan: &ConfigurationPlan, ctx: &Context<'_>) -> Result<()>;

    /// Packages the archetype cannot work without. Pure.
    fn required_packages(&self) -> Vec<PackageRef>;

    fn recommended_packages(&self) -> Vec<PackageRef> {
        Vec::new()
    }

    fn optional_packages(&self) -> Vec<PackageRef> {
        Vec::new()
    }
}

/// Concatenate package lists, keeping the first occurrence of each name
pub(crate) fn merge_packages(lists: &[Vec<PackageRef>]) -> Vec<PackageRef> {
    let mut merged: Vec<PackageRef> = Vec::new();
    for package in lists.iter().flatten() {
        if !merged.iter().any(|p| p.name == package.name) {
            merged.push(*package);
        }
    }
    merged
}

/// Delete a file; a missing file counts as done
pub(crate) fn remove_file(ctx: &Context<'_>, label: &str, path: &str) -> Result<bool> {
    ctx.tasks.run(label, || {
        ctx.workspace.remove_file(path)?;
        Ok(true)
    })
}

/// Delete directory trees; missing directories count as done
pub(crate) fn remove_dirs(ctx: &Context<'_>, label: &str, dirs: &[&str]) -> Result<bool> {
    ctx.tasks.run(label, || {
        for dir in dirs {
            ctx.workspace.remove_dir(dir)?;
        }
        Ok(true)
    })
}

pub(crate) fn remove_frontend_assets(ctx: &Context<'_>) -> Result<bool> {
    remove_dirs(
        ctx,
        "Removing frontend assets",
        &[paths::VIEWS_DIR, paths::JS_DIR, paths::CSS_DIR],
    )
}

/// Write a generated file, creating parent directories
pub(crate) fn write_file(ctx: &Context<'_>, label: &str, path: &str, contents: &str) -> Result<bool> {
    ctx.tasks.run(label, || {
        ctx.workspace.write(path, contents)?;
        Ok(true)
    })
}

/// Structured edit of an existing file; a missing file counts as done
pub(crate) fn edit<F>(ctx: &Context<'_>, label: &str, path: &str, f: F) -> Result<bool>
where
    F: FnOnce(&str) -> Option<String>,
{
    ctx.tasks.run(label, || {
        edit_file(ctx.workspace, path, f)?;
        Ok(true)
    })
}

/// Edit one top-level entry of a PHP config array
pub(crate) fn edit_php_config<F>(ctx: &Context<'_>, label: &str, path: &str, f: F) -> Result<bool>
where
    F: FnOnce(&mut PhpConfig) -> bool,
{
    edit(ctx, label, path, |source| {
        let mut config = PhpConfig::parse(source);
        f(&mut config).then(|| config.render().to_string())
    })
}

/// Append a marked route block to `routes/api.php` when that file exists
pub(crate) fn append_api_routes(ctx: &Context<'_>, label: &str, block: &str, body: &str) -> Result<bool> {
    edit(ctx, label, paths::API_ROUTES, |source| {
        routes::append_block(source, block, body)
    })
}
