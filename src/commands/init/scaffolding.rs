//! Directory and file scaffolding for the init command.

use crate::config::Config;
use crate::context::{KNOWLEDGE_SUBDIRS, ProjectContext};
use crate::error::{Result, SpektError};
use crate::fs::atomic_write_file;
use std::fs;
use std::path::Path;

const GITIGNORE: &str = include_str!("../../../defaults/gitignore");
const CONVENTIONS: &str = include_str!("../../../defaults/conventions.md");

pub(super) fn create_directories(ctx: &ProjectContext) -> Result<()> {
    create_dir(&ctx.state_dir)?;
    create_dir(&ctx.specs_dir)?;
    create_dir(&ctx.plans_dir)?;
    create_dir(&ctx.knowledge_dir)?;
    for sub in KNOWLEDGE_SUBDIRS {
        create_dir(&ctx.knowledge_dir.join(sub))?;
    }
    create_dir(&ctx.logs_dir)?;

    Ok(())
}

pub(super) fn write_default_config(ctx: &ProjectContext) -> Result<()> {
    let yaml = Config::default().to_yaml()?;
    atomic_write_file(ctx.config_path(), &yaml)
}

pub(super) fn write_gitignore(ctx: &ProjectContext) -> Result<()> {
    atomic_write_file(ctx.gitignore_path(), GITIGNORE)
}

pub(super) fn write_knowledge_seed(ctx: &ProjectContext) -> Result<()> {
    atomic_write_file(ctx.knowledge_dir.join("conventions.md"), CONVENTIONS)?;

    for sub in KNOWLEDGE_SUBDIRS {
        let readme = ctx.knowledge_dir.join(sub).join("README.md");
        atomic_write_file(&readme, &knowledge_readme(sub))?;
    }

    Ok(())
}

/// README body for a knowledge subdirectory, e.g. `# Learnings`.
pub(super) fn knowledge_readme(name: &str) -> String {
    format!(
        "# {}\n\nThis directory contains {} documentation.\n",
        title_case(name),
        name
    )
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| {
        SpektError::UserError(format!(
            "failed to create directory '{}': {}",
            path.display(),
            e
        ))
    })
}
