//! Starter Core - interactive configuration of a fresh Laravel project
//!
//! A wizard asks what kind of application is being built, narrows the
//! follow-up questions to options that make sense for the answers so far, and
//! then runs the matching archetype configurator: packages are required,
//! generators are run, and project files are trimmed or generated.
//!
//! # Architecture
//!
//! - **Catalog and selection**: `catalog`, `filter`, `plan` are pure and hold
//!   every option and the rules between them
//! - **Provisioning**: `configurators`, `registry`, `installer`, `tasks` turn a
//!   plan into labeled tasks, with dry-run enforced in one place
//! - **Collaborators**: `runtime` (processes, git checkpoint), `workspace`
//!   (files), `ui` (prompts) are traits so the flow can run against doubles
//! - **Front end**: `wizard` drives one run; `tui` wires it to cliclack and
//!   the real filesystem (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts and [`tui::run`]

pub mod catalog;
pub mod config;
pub mod configurators;
pub mod filter;
pub mod installer;
pub mod plan;
pub mod registry;
pub mod runtime;
pub mod tasks;
pub mod templates;
pub mod ui;
pub mod wizard;
pub mod workspace;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{Archetype, Capability, Feature, PackageRef};
pub use config::{SetupConfig, Toolchain};
pub use configurators::Configurator;
pub use plan::{Answers, ConfigurationPlan, Infrastructure, PlanDraft, PlanError};
pub use registry::RegistryError;
pub use wizard::{Outcome, PlanSource};

#[cfg(feature = "tui")]
pub use tui::run;
