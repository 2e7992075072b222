//! CLI argument parsing for spektacular.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Spektacular: agent-agnostic tool for spec-driven development.
///
/// Specifications live as markdown under `.spektacular/specs/`. The `plan`
/// command hands a spec to a coding agent, relays its clarification
/// questions, and writes the resulting implementation plan.
#[derive(Parser, Debug)]
#[command(name = "spektacular")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug diagnostics on stderr (RUST_LOG overrides).
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for spektacular.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a spektacular project in the current directory.
    ///
    /// Creates `.spektacular/` with specs/, plans/, knowledge/, a default
    /// config.yaml and a .gitignore.
    Init(InitArgs),

    /// Create a new specification from the template.
    New(NewArgs),

    /// Generate an implementation plan from a specification.
    ///
    /// Runs the configured agent, answering its clarification questions
    /// interactively (or automatically with --non-interactive), and writes
    /// the plan to `.spektacular/plans/<spec>/plan.md`.
    Plan(PlanArgs),

    /// List the registered agent runners.
    Runners,
}

/// Arguments for the `init` command.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing .spektacular directory.
    #[arg(long, action = ArgAction::SetTrue)]
    pub force: bool,
}

/// Arguments for the `new` command.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Spec file name (without the .md extension).
    pub name: String,

    /// Feature title (defaults to the name in title case).
    #[arg(long)]
    pub title: Option<String>,

    /// Feature description.
    #[arg(long)]
    pub description: Option<String>,
}

/// Arguments for the `plan` command.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Path to the specification markdown file.
    pub spec_file: PathBuf,

    /// Answer agent questions automatically instead of prompting.
    #[arg(long, action = ArgAction::SetTrue)]
    pub non_interactive: bool,

    /// Capture the agent's raw output under the configured log directory.
    #[arg(long, action = ArgAction::SetTrue)]
    pub debug: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
