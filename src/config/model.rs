//! Config struct definition.

use super::types::{AgentConfig, DebugConfig, SessionConfig};
use serde::{Deserialize, Serialize};

/// Configuration for a spektacular project.
///
/// This struct represents the contents of `.spektacular/config.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility, and every
/// section falls back to its defaults when omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Agent launch settings; `agent.command` selects the runner.
    pub agent: AgentConfig,

    /// Question/resume loop limits.
    pub session: SessionConfig,

    /// Raw agent output capture.
    pub debug: DebugConfig,
}
