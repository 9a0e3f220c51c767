//! External process handling
//!
//! This module provides:
//! - The [`CommandRunner`] seam used for every package-manager call
//! - Toolchain detection (PHP, Composer, npm, Git)
//! - The pre-flight git checkpoint

pub mod check;
pub mod checkpoint;
pub mod process;

pub use check::{check_tool, check_toolchain, missing_tools, RuntimeInfo};
pub use checkpoint::Checkpoint;
pub use process::{CommandRunner, SystemRunner};
