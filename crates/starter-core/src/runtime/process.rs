//! External process invocation
//!
//! Every package-manager and generator call goes through [`CommandRunner`],
//! which reports only whether the process exited successfully.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs one external program to completion
pub trait CommandRunner {
    /// Run `program` with `args`; `Ok(true)` when it exited with status 0
    fn run(&self, program: &str, args: &[String]) -> Result<bool>;
}

/// Runs programs synchronously inside the project root
pub struct SystemRunner {
    root: PathBuf,
}

impl SystemRunner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<bool> {
        debug!(program, ?args, root = %self.root.display(), "running command");

        let output = Command::new(program)
            .args(args)
            .current_dir(&self.root)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("Failed to execute: {} {}", program, args.join(" ")))?;

        if !output.status.success() {
            debug!(
                program,
                code = output.status.code().unwrap_or(-1),
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "command failed"
            );
        }

        Ok(output.status.success())
    }
}

/// Turn string slices into owned arguments
pub fn args<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}
