//! Pre-flight git checkpoint
//!
//! Before any question is asked, a `pre-setup-<timestamp>` tag is created so
//! every change made by the wizard can be discarded by hand with
//! `git reset --hard <tag>`.

use super::process::{args, CommandRunner};
use chrono::{DateTime, TimeZone};
use std::fmt;
use tracing::warn;

/// Result of the checkpoint step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checkpoint {
    Created(String),
    AlreadyExists(String),
    /// Not created in dry-run mode
    Skipped(String),
    Failed(String),
}

impl Checkpoint {
    pub fn tag(&self) -> &str {
        match self {
            Checkpoint::Created(tag)
            | Checkpoint::AlreadyExists(tag)
            | Checkpoint::Skipped(tag)
            | Checkpoint::Failed(tag) => tag,
        }
    }

    /// Whether the tag can be used to roll back
    pub fn is_usable(&self) -> bool {
        matches!(self, Checkpoint::Created(_) | Checkpoint::AlreadyExists(_))
    }
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Checkpoint::Created(tag) => write!(f, "Git tag {} created for rollback", tag),
            Checkpoint::AlreadyExists(tag) => write!(f, "Git tag {} already exists", tag),
            Checkpoint::Skipped(tag) => write!(f, "Would create git tag {}", tag),
            Checkpoint::Failed(tag) => write!(f, "Could not create git tag {}", tag),
        }
    }
}

/// Tag name for a checkpoint taken at `now`
pub fn tag_name<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    format!("pre-setup-{}", now.format("%Y-%m-%d-%H%M%S"))
}

/// Create `tag` unless it already exists. Never fails the run.
pub fn create(runner: &dyn CommandRunner, git: &str, tag: &str) -> Checkpoint {
    let exists = runner.run(
        git,
        &args(["rev-parse", "-q", "--verify", &format!("refs/tags/{}", tag)]),
    );
    match exists {
        Ok(true) => return Checkpoint::AlreadyExists(tag.to_string()),
        Ok(false) => {}
        Err(e) => {
            warn!(error = %e, "could not query git tags");
            return Checkpoint::Failed(tag.to_string());
        }
    }

    match runner.run(git, &args(["tag", tag])) {
        Ok(true) => Checkpoint::Created(tag.to_string()),
        Ok(false) => {
            warn!(tag, "git tag exited with a failure status");
            Checkpoint::Failed(tag.to_string())
        }
        Err(e) => {
            warn!(error = %e, "could not run git");
            Checkpoint::Failed(tag.to_string())
        }
    }
}
