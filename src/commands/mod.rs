//! Command implementations for spektacular.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command resolves the project from the current
//! working directory and delegates to a function that takes the resolved
//! [`ProjectContext`](crate::context::ProjectContext), which is what tests call.

mod init;
mod new;
mod plan;
mod runners;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Init(args) => init::cmd_init(args),
        Command::New(args) => new::cmd_new(args),
        Command::Plan(args) => plan::cmd_plan(args),
        Command::Runners => runners::cmd_runners(),
    }
}
