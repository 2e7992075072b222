//! Configuration sections and defaults for spektacular.
//!
//! This module defines the nested config structs and the default value
//! functions used by serde when a field is missing.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How to launch the coding agent.
///
/// `command` doubles as the runner registry key: the adapter registered under
/// that name is the one that drives the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Executable name (and registry key), e.g. `claude`.
    #[serde(default = "default_agent_command")]
    pub command: String,

    /// Extra arguments passed verbatim after the prompt flags.
    #[serde(default = "default_agent_args")]
    pub args: Vec<String>,

    /// Tools the agent may use without asking (joined with commas on the command line).
    #[serde(default = "default_allowed_tools")]
    pub allowed_tools: Vec<String>,

    /// Pass the backend's "skip all permission prompts" flag.
    #[serde(default)]
    pub dangerously_skip_permissions: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            command: default_agent_command(),
            args: default_agent_args(),
            allowed_tools: default_allowed_tools(),
            dangerously_skip_permissions: false,
        }
    }
}

/// Limits for the question/resume loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Maximum number of agent invocations in one conversation.
    #[serde(default = "default_max_turns")]
    pub max_turns: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_turns: default_max_turns(),
        }
    }
}

/// Raw output capture for troubleshooting agent runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Append every raw stdout line of the agent to a timestamped log file.
    #[serde(default)]
    pub enabled: bool,

    /// Directory for raw-line logs, relative to the project root.
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
        }
    }
}

pub(crate) fn default_agent_command() -> String {
    "claude".to_string()
}

pub(crate) fn default_agent_args() -> Vec<String> {
    vec![
        "--output-format".to_string(),
        "stream-json".to_string(),
        "--verbose".to_string(),
    ]
}

pub(crate) fn default_allowed_tools() -> Vec<String> {
    [
        "Bash", "Read", "Write", "Edit", "Glob", "Grep", "WebFetch", "WebSearch",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub(crate) fn default_max_turns() -> u32 {
    20
}

pub(crate) fn default_log_dir() -> PathBuf {
    PathBuf::from(".spektacular").join("logs")
}
