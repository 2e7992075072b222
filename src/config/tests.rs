//! Tests for config functionality.

use crate::config::{AgentConfig, Config};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_default_agent_config() {
    let agent = AgentConfig::default();

    assert_eq!(agent.command, "claude");
    assert!(agent.args.contains(&"--output-format".to_string()));
    assert!(agent.args.contains(&"stream-json".to_string()));
    assert!(agent.allowed_tools.contains(&"Bash".to_string()));
    assert!(!agent.dangerously_skip_permissions);
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.agent.command, "claude");
    assert_eq!(config.session.max_turns, 20);
    assert!(!config.debug.enabled);
    assert_eq!(config.debug.log_dir, PathBuf::from(".spektacular/logs"));
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
agent:
  command: my-agent
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.agent.command, "my-agent");
    // Unspecified fields in a present section still default
    assert_eq!(config.agent.args, AgentConfig::default().args);
    assert_eq!(config.session.max_turns, 20);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
agent:
  command: claude
  args: ["--output-format", "stream-json"]
  allowed_tools: [Read, Grep]
  dangerously_skip_permissions: true
session:
  max_turns: 5
debug:
  enabled: true
  log_dir: /tmp/spekt-logs
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.agent.args, vec!["--output-format", "stream-json"]);
    assert_eq!(config.agent.allowed_tools, vec!["Read", "Grep"]);
    assert!(config.agent.dangerously_skip_permissions);
    assert_eq!(config.session.max_turns, 5);
    assert!(config.debug.enabled);
    assert_eq!(config.debug.log_dir, PathBuf::from("/tmp/spekt-logs"));
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
agent:
  command: claude
  model: opus
theme: github-dark
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.agent.command, "claude");
}

#[test]
fn test_empty_command_fails() {
    let yaml = r#"
agent:
  command: ""
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("agent.command must not be empty"));
}

#[test]
fn test_blank_allowed_tool_fails() {
    let yaml = r#"
agent:
  allowed_tools: [Read, " "]
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("allowed_tools"));
}

#[test]
fn test_zero_max_turns_fails() {
    let yaml = r#"
session:
  max_turns: 0
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("max_turns must be greater than 0"));
}

#[test]
fn test_invalid_yaml_fails() {
    let err = Config::from_yaml("agent: [unclosed").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_yaml_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");

    let mut config = Config::default();
    config.agent.dangerously_skip_permissions = true;
    config.session.max_turns = 7;
    std::fs::write(&path, config.to_yaml().unwrap()).unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_or_default_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_or_default(temp_dir.path().join("missing.yaml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_or_default_invalid_file_errors() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(&path, "session:\n  max_turns: 0\n").unwrap();

    assert!(Config::load_or_default(&path).is_err());
}
