//! Adapter for the `claude` CLI agent.
//!
//! The agent is launched as a child process in print mode and emits one JSON
//! object per stdout line (`--output-format stream-json`). Each line becomes
//! an [`Event`](crate::runner::Event) on the run's event stream.

mod process;

use super::{RunOptions, RunStreams, Runner};

/// Registry name of this adapter.
pub const NAME: &str = "claude";

/// Drives the `claude` CLI as a subprocess.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaudeRunner;

impl ClaudeRunner {
    pub fn new() -> Self {
        Self
    }

    /// Registry constructor.
    pub fn boxed() -> Box<dyn Runner> {
        Box::new(Self::new())
    }
}

impl Runner for ClaudeRunner {
    fn run(&self, options: RunOptions) -> RunStreams {
        let (tx, streams) = RunStreams::channel();
        std::thread::spawn(move || process::drive(options, tx));
        streams
    }
}

/// Full argument vector for one invocation, program name first.
///
/// Order: `<command> -p <prompt> [--system-prompt <s>] <args...>
/// [--allowedTools <a,b>] [--dangerously-skip-permissions] [--resume <id>]`.
pub fn build_args(options: &RunOptions) -> Vec<String> {
    let config = &options.config;
    let mut argv = vec![
        config.command.clone(),
        "-p".to_string(),
        options.prompt.clone(),
    ];

    if let Some(system_prompt) = &options.system_prompt {
        argv.push("--system-prompt".to_string());
        argv.push(system_prompt.clone());
    }

    argv.extend(config.args.iter().cloned());

    if !config.allowed_tools.is_empty() {
        argv.push("--allowedTools".to_string());
        argv.push(config.allowed_tools.join(","));
    }

    if config.dangerously_skip_permissions {
        argv.push("--dangerously-skip-permissions".to_string());
    }

    if let Some(session_id) = &options.session_id {
        argv.push("--resume".to_string());
        argv.push(session_id.clone());
    }

    argv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AgentConfig;

    fn bare_config() -> AgentConfig {
        AgentConfig {
            command: "claude".to_string(),
            args: Vec::new(),
            allowed_tools: Vec::new(),
            dangerously_skip_permissions: false,
        }
    }

    #[test]
    fn test_minimal_args() {
        let opts = RunOptions::new("do it", bare_config());
        assert_eq!(build_args(&opts), vec!["claude", "-p", "do it"]);
    }

    #[test]
    fn test_default_config_args() {
        let opts = RunOptions::new("plan", AgentConfig::default());
        let argv = build_args(&opts);

        assert_eq!(&argv[..3], &["claude", "-p", "plan"]);
        assert!(argv.contains(&"--output-format".to_string()));
        assert!(argv.contains(&"stream-json".to_string()));
        let tools_at = argv.iter().position(|a| a == "--allowedTools").unwrap();
        assert!(argv[tools_at + 1].starts_with("Bash,Read,Write"));
        assert!(!argv.contains(&"--resume".to_string()));
        assert!(!argv.contains(&"--dangerously-skip-permissions".to_string()));
    }

    #[test]
    fn test_all_flags_in_order() {
        let config = AgentConfig {
            command: "claude".to_string(),
            args: vec!["--output-format".to_string(), "stream-json".to_string()],
            allowed_tools: vec!["Bash".to_string(), "Read".to_string()],
            dangerously_skip_permissions: true,
        };
        let opts = RunOptions::new("answer", config)
            .with_system_prompt("be a planner")
            .with_session_id("sess-42");

        assert_eq!(
            build_args(&opts),
            vec![
                "claude",
                "-p",
                "answer",
                "--system-prompt",
                "be a planner",
                "--output-format",
                "stream-json",
                "--allowedTools",
                "Bash,Read",
                "--dangerously-skip-permissions",
                "--resume",
                "sess-42",
            ]
        );
    }

    #[test]
    fn test_resume_without_system_prompt() {
        let opts = RunOptions::new("yes", bare_config()).with_session_id("abc");
        assert_eq!(
            build_args(&opts),
            vec!["claude", "-p", "yes", "--resume", "abc"]
        );
    }

    #[test]
    fn test_prompt_is_one_argument() {
        let opts = RunOptions::new("line one\nline \"two\" --resume x", bare_config());
        let argv = build_args(&opts);

        assert_eq!(argv.len(), 3);
        assert_eq!(argv[2], "line one\nline \"two\" --resume x");
    }

    #[test]
    fn test_runner_is_registered_under_name() {
        assert!(crate::runner::registered_names().contains(&NAME.to_string()));
    }
}
