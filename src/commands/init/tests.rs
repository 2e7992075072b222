//! Tests for the init command.

use super::*;
use crate::config::Config;
use std::fs;
use tempfile::TempDir;

use super::scaffolding::knowledge_readme;

#[test]
fn test_init_creates_layout() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ProjectContext::resolve_from(temp_dir.path());

    init_project(&ctx, false).unwrap();

    assert!(ctx.specs_dir.is_dir());
    assert!(ctx.plans_dir.is_dir());
    assert!(ctx.state_dir.join("logs").is_dir());
    for sub in ["learnings", "architecture", "gotchas"] {
        let dir = ctx.knowledge_dir.join(sub);
        assert!(dir.is_dir(), "missing {}", sub);
        assert!(dir.join("README.md").is_file());
    }
    assert!(ctx.knowledge_dir.join("conventions.md").is_file());
}

#[test]
fn test_init_writes_loadable_default_config() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ProjectContext::resolve_from(temp_dir.path());

    init_project(&ctx, false).unwrap();

    let config = Config::load(ctx.config_path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_init_gitignore_ignores_logs() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ProjectContext::resolve_from(temp_dir.path());

    init_project(&ctx, false).unwrap();

    let gitignore = fs::read_to_string(ctx.gitignore_path()).unwrap();
    assert!(gitignore.lines().any(|line| line.trim() == "logs/"));
}

#[test]
fn test_init_refuses_existing_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ProjectContext::resolve_from(temp_dir.path());
    fs::create_dir(&ctx.state_dir).unwrap();

    let err = init_project(&ctx, false).unwrap_err();

    assert!(err.to_string().contains("already exists"));
    assert!(err.to_string().contains("--force"));
    assert!(!ctx.config_path().exists());
}

#[test]
fn test_init_force_resets_config_and_keeps_specs() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ProjectContext::resolve_from(temp_dir.path());
    init_project(&ctx, false).unwrap();

    fs::write(ctx.config_path(), "session:\n  max_turns: 3\n").unwrap();
    fs::write(ctx.specs_dir.join("keep.md"), "# Mine\n").unwrap();

    init_project(&ctx, true).unwrap();

    assert_eq!(Config::load(ctx.config_path()).unwrap().session.max_turns, 20);
    assert_eq!(
        fs::read_to_string(ctx.specs_dir.join("keep.md")).unwrap(),
        "# Mine\n"
    );
}

#[test]
fn test_knowledge_readme_title() {
    let readme = knowledge_readme("gotchas");
    assert!(readme.starts_with("# Gotchas\n"));
    assert!(readme.contains("gotchas documentation"));
}
