//! Project layout resolution for spektacular.
//!
//! Every command works against the `.spektacular/` directory at the project
//! root. This module resolves the paths inside it so commands never build
//! them by hand.

use crate::error::{Result, SpektError};
use std::env;
use std::path::{Path, PathBuf};

/// Project state directory name, relative to the project root.
pub const STATE_DIR: &str = ".spektacular";

/// Knowledge subdirectories created by `init`.
pub const KNOWLEDGE_SUBDIRS: &[&str] = &["learnings", "architecture", "gotchas"];

/// Resolved paths for a spektacular project. All paths are absolute when the
/// root is.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Project root (the directory containing `.spektacular/`).
    pub root: PathBuf,

    /// `{root}/.spektacular/`
    pub state_dir: PathBuf,

    /// `{root}/.spektacular/specs/`
    pub specs_dir: PathBuf,

    /// `{root}/.spektacular/plans/`
    pub plans_dir: PathBuf,

    /// `{root}/.spektacular/knowledge/`
    pub knowledge_dir: PathBuf,

    /// `{root}/.spektacular/logs/` (machine-local, git-ignored)
    pub logs_dir: PathBuf,
}

impl ProjectContext {
    /// Resolve the project from the current working directory.
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            SpektError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Ok(Self::resolve_from(cwd))
    }

    /// Resolve the project rooted at `root`.
    pub fn resolve_from<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let state_dir = root.join(STATE_DIR);

        Self {
            specs_dir: state_dir.join("specs"),
            plans_dir: state_dir.join("plans"),
            knowledge_dir: state_dir.join("knowledge"),
            logs_dir: state_dir.join("logs"),
            state_dir,
            root,
        }
    }

    /// Whether `init` has been run for this project.
    pub fn is_initialized(&self) -> bool {
        self.state_dir.is_dir()
    }

    /// Fail with an actionable message unless the project is initialized.
    pub fn require_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(SpektError::UserError(format!(
                "no spektacular project found at '{}'\n\
                 Fix: run `spektacular init` first.",
                self.root.display()
            )))
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.state_dir.join("config.yaml")
    }

    pub fn gitignore_path(&self) -> PathBuf {
        self.state_dir.join(".gitignore")
    }

    /// Spec file path for `name`; a trailing `.md` is not doubled.
    pub fn spec_path(&self, name: &str) -> PathBuf {
        if name.ends_with(".md") {
            self.specs_dir.join(name)
        } else {
            self.specs_dir.join(format!("{}.md", name))
        }
    }

    /// Plan output directory for a spec file, named after its stem.
    pub fn plan_dir(&self, spec_file: &Path) -> PathBuf {
        let stem = spec_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "plan".to_string());
        self.plans_dir.join(stem)
    }

    /// Resolve a configured path (such as the debug log directory) against the root.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}
