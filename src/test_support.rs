use crate::config::AgentConfig;
use crate::error::SpektError;
use crate::runner::claude::ClaudeRunner;
use crate::runner::{Event, RunOptions, RunStreams, Runner};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Canned output for one invocation of a [`ScriptedRunner`].
#[derive(Debug, Default)]
pub(crate) struct ScriptedTurn {
    events: Vec<Value>,
    error: Option<SpektError>,
}

impl ScriptedTurn {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn event(mut self, value: Value) -> Self {
        self.events.push(value);
        self
    }

    pub(crate) fn system(self, session_id: &str) -> Self {
        self.event(json!({"type": "system", "subtype": "init", "session_id": session_id}))
    }

    pub(crate) fn text(self, text: &str) -> Self {
        self.event(json!({
            "type": "assistant",
            "message": {"content": [{"type": "text", "text": text}]}
        }))
    }

    pub(crate) fn tool_use(self, name: &str, input: Value) -> Self {
        self.event(json!({
            "type": "assistant",
            "message": {"content": [{"type": "tool_use", "id": "tool-1", "name": name, "input": input}]}
        }))
    }

    pub(crate) fn result(self, text: &str) -> Self {
        self.event(json!({"type": "result", "result": text, "is_error": false}))
    }

    pub(crate) fn error_result(self, text: &str) -> Self {
        self.event(json!({"type": "result", "result": text, "is_error": true}))
    }

    pub(crate) fn fail(mut self, error: SpektError) -> Self {
        self.error = Some(error);
        self
    }
}

/// A [`Runner`] that replays scripted turns in order and records every call.
///
/// Running out of turns yields an empty, successful invocation.
#[derive(Debug, Default)]
pub(crate) struct ScriptedRunner {
    turns: Mutex<VecDeque<ScriptedTurn>>,
    calls: Mutex<Vec<RunOptions>>,
}

impl ScriptedRunner {
    pub(crate) fn new(turns: Vec<ScriptedTurn>) -> Self {
        Self {
            turns: Mutex::new(turns.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Options received so far, in call order.
    pub(crate) fn calls(&self) -> MutexGuard<'_, Vec<RunOptions>> {
        self.calls.lock().unwrap()
    }
}

impl Runner for ScriptedRunner {
    fn run(&self, options: RunOptions) -> RunStreams {
        self.calls.lock().unwrap().push(options);
        let turn = self.turns.lock().unwrap().pop_front().unwrap_or_default();

        let (tx, streams) = RunStreams::channel();
        std::thread::spawn(move || {
            for value in turn.events {
                let Value::Object(payload) = value else {
                    panic!("scripted events must be JSON objects");
                };
                if !tx.send_event(Event::from_payload(payload)) {
                    return;
                }
            }
            if let Some(error) = turn.error {
                tx.fail(error);
            }
        });
        streams
    }
}

/// Write an executable `sh` script named `fake-agent` into `dir`.
#[cfg(unix)]
pub(crate) fn write_fake_agent(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-agent");
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

/// Agent config that launches a fake-agent script through the claude adapter.
///
/// The script path is registered as a runner name, so the config resolves
/// through the registry like the real `claude` command does.
#[cfg(unix)]
pub(crate) fn fake_agent_config(dir: &Path, body: &str) -> AgentConfig {
    let script = write_fake_agent(dir, body);
    let command = script.display().to_string();
    crate::runner::register(command.clone(), ClaudeRunner::boxed);
    AgentConfig {
        command,
        args: Vec::new(),
        allowed_tools: Vec::new(),
        dangerously_skip_permissions: false,
    }
}
