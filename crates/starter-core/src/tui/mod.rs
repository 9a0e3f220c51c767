//! Terminal front end using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod prompts;

#[cfg(feature = "tui")]
pub use prompts::CliclackPrompter;

#[cfg(feature = "tui")]
pub use run::run;

#[cfg(feature = "tui")]
mod run {
    use super::CliclackPrompter;
    use crate::config::SetupConfig;
    use crate::runtime::{check_toolchain, SystemRunner};
    use crate::wizard::{self, Collaborators, Outcome, PlanSource};
    use crate::workspace::LocalWorkspace;
    use anyhow::Result;

    /// Run the wizard against the project on disk with interactive prompts
    pub fn run(config: &SetupConfig, source: PlanSource) -> Result<Outcome> {
        let ui = CliclackPrompter::new(config.assume_defaults);
        let runner = SystemRunner::new(&config.project_root);
        let workspace = LocalWorkspace::new(&config.project_root);

        wizard::run(
            config,
            source,
            &Collaborators {
                ui: &ui,
                runner: &runner,
                workspace: &workspace,
                probe: check_toolchain,
            },
        )
    }
}
