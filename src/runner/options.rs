//! Parameters for a single agent invocation.

use crate::config::AgentConfig;
use std::path::PathBuf;

/// Everything a [`Runner`](super::Runner) needs for one invocation.
///
/// A present `session_id` instructs the backend to resume that exact
/// conversation rather than start a new one. That is how a multi-turn
/// question/answer exchange stays one logical conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Prompt text for this turn.
    pub prompt: String,
    /// Optional system/specialization prompt.
    pub system_prompt: Option<String>,
    /// How to launch the agent.
    pub config: AgentConfig,
    /// Conversation to resume; `None` starts a new one.
    pub session_id: Option<String>,
    /// Working directory for the agent; `None` means the current directory.
    pub cwd: Option<PathBuf>,
    /// Short label for diagnostics and log file names.
    pub label: String,
    /// Directory for raw-line capture; `None` disables it.
    pub debug_log_dir: Option<PathBuf>,
}

impl RunOptions {
    /// Options for a fresh conversation with the given prompt.
    pub fn new(prompt: impl Into<String>, config: AgentConfig) -> Self {
        Self {
            prompt: prompt.into(),
            system_prompt: None,
            config,
            session_id: None,
            cwd: None,
            label: "agent".to_string(),
            debug_log_dir: None,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_debug_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.debug_log_dir = Some(dir.into());
        self
    }

    /// Copy of these options for the next turn: new prompt, resumed session.
    pub fn resume(&self, prompt: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            session_id: Some(session_id.into()),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_fresh_conversation() {
        let opts = RunOptions::new("hello", AgentConfig::default());
        assert_eq!(opts.prompt, "hello");
        assert_eq!(opts.session_id, None);
        assert_eq!(opts.system_prompt, None);
        assert_eq!(opts.cwd, None);
        assert_eq!(opts.debug_log_dir, None);
    }

    #[test]
    fn test_resume_keeps_everything_but_prompt_and_session() {
        let opts = RunOptions::new("first", AgentConfig::default())
            .with_system_prompt("system")
            .with_cwd("/work")
            .with_label("plan-auth");

        let next = opts.resume("answer", "sess-1");

        assert_eq!(next.prompt, "answer");
        assert_eq!(next.session_id.as_deref(), Some("sess-1"));
        assert_eq!(next.system_prompt.as_deref(), Some("system"));
        assert_eq!(next.cwd, Some(PathBuf::from("/work")));
        assert_eq!(next.label, "plan-auth");
    }
}
