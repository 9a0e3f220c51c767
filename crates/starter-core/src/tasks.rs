//! Provisioning action executor
//!
//! Every side effect a configurator performs is wrapped in a labeled task
//! run through [`TaskRunner`]. Dry-run is decided here and nowhere else:
//! the label is shown, the operation is not called.
//!
//! Failure policy: a failed task is recorded and the sequence continues.
//! The collected [`TaskReport`] is shown once the run finishes, together with
//! the checkpoint tag to reset to.

use crate::ui::Prompter;
use anyhow::Result;
use std::cell::RefCell;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    Succeeded,
    /// Reported failure, with error detail when the operation errored
    Failed(Option<String>),
    /// Not executed (dry-run)
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    pub label: String,
    pub status: TaskStatus,
}

/// Runs labeled side-effecting operations one at a time
pub struct TaskRunner<'a> {
    ui: &'a dyn Prompter,
    dry_run: bool,
    records: RefCell<Vec<TaskRecord>>,
}

impl<'a> TaskRunner<'a> {
    pub fn new(ui: &'a dyn Prompter, dry_run: bool) -> Self {
        Self {
            ui,
            dry_run,
            records: RefCell::new(Vec::new()),
        }
    }

    /// Run `op` under `label`.
    ///
    /// Returns whether the task succeeded; in dry-run `op` is never called and
    /// the task counts as successful. The outer `Result` only fails when
    /// output cannot be written.
    pub fn run<F>(&self, label: impl Into<String>, op: F) -> Result<bool>
    where
        F: FnOnce() -> Result<bool>,
    {
        let label = label.into();

        if self.dry_run {
            self.ui.step(&format!("{} (dry run)", label))?;
            self.record(label, TaskStatus::Skipped);
            return Ok(true);
        }

        debug!(task = %label, "starting");
        let status = match op() {
            Ok(true) => {
                self.ui.success(&label)?;
                TaskStatus::Succeeded
            }
            Ok(false) => {
                self.ui.error(&format!("{} failed", label))?;
                TaskStatus::Failed(None)
            }
            Err(e) => {
                warn!(task = %label, error = %e, "task errored");
                self.ui.error(&format!("{} failed: {:#}", label, e))?;
                TaskStatus::Failed(Some(format!("{:#}", e)))
            }
        };

        let succeeded = status == TaskStatus::Succeeded;
        self.record(label, status);
        Ok(succeeded)
    }

    fn record(&self, label: String, status: TaskStatus) {
        self.records.borrow_mut().push(TaskRecord { label, status });
    }

    /// Snapshot of everything run so far
    pub fn report(&self) -> TaskReport {
        TaskReport {
            records: self.records.borrow().clone(),
        }
    }
}

/// Outcome of every task in a run, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskReport {
    pub records: Vec<TaskRecord>,
}

impl TaskReport {
    pub fn failures(&self) -> Vec<&TaskRecord> {
        self.records
            .iter()
            .filter(|r| matches!(r.status, TaskStatus::Failed(_)))
            .collect()
    }

    pub fn is_clean(&self) -> bool {
        self.failures().is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.label.as_str()).collect()
    }
}
