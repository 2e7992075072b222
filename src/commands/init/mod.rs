//! Implementation of the `spektacular init` command.
//!
//! # What `spektacular init` does
//!
//! 1. Refuses to touch an existing `.spektacular/` unless `--force` is given
//! 2. Creates `specs/`, `plans/`, `knowledge/` (with `learnings/`,
//!    `architecture/`, `gotchas/`) and `logs/`
//! 3. Writes the default `config.yaml` and `.gitignore`
//! 4. Seeds `knowledge/conventions.md` and a README per knowledge subdirectory

mod scaffolding;

#[cfg(test)]
mod tests;

use crate::cli::InitArgs;
use crate::context::ProjectContext;
use crate::error::{Result, SpektError};

use scaffolding::*;

/// Execute the `spektacular init` command.
pub fn cmd_init(args: InitArgs) -> Result<()> {
    let ctx = ProjectContext::resolve()?;
    init_project(&ctx, args.force)?;

    println!("Initialized spektacular project in {}", ctx.root.display());
    println!();
    println!("Next steps:");
    println!("  spektacular new <name>          create a spec from the template");
    println!("  spektacular plan <spec_file>    generate an implementation plan");

    Ok(())
}

/// Create the project layout under `ctx.state_dir`.
///
/// With `force`, existing files are overwritten with their defaults; other
/// files already in the directory (specs, plans) are left alone.
pub fn init_project(ctx: &ProjectContext, force: bool) -> Result<()> {
    if ctx.state_dir.exists() && !force {
        return Err(SpektError::UserError(format!(
            ".spektacular directory already exists at '{}'\n\
             Fix: use --force to overwrite.",
            ctx.state_dir.display()
        )));
    }

    tracing::debug!(path = %ctx.state_dir.display(), force, "initializing project");

    create_directories(ctx)?;
    write_default_config(ctx)?;
    write_gitignore(ctx)?;
    write_knowledge_seed(ctx)?;

    Ok(())
}
