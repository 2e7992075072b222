//! Child process supervision for the claude adapter.
//!
//! One worker thread per invocation spawns the agent, forwards parsed stdout
//! lines as events, then reaps the child. A second thread drains stderr so the
//! agent never blocks on a full pipe.

use super::build_args;
use crate::error::{Result, SpektError};
use crate::runner::{Event, RunOptions, RunSender};
use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread::JoinHandle;

/// Longest stdout line accepted from the agent.
pub(crate) const MAX_LINE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of trailing stderr lines kept for error messages.
const STDERR_TAIL_LINES: usize = 20;

/// Run one invocation to completion and close the streams.
pub(super) fn drive(options: RunOptions, tx: RunSender) {
    match execute(&options, &tx) {
        Ok(()) => drop(tx),
        Err(e) => {
            tracing::debug!(label = %options.label, error = %e, "agent run failed");
            tx.fail(e);
        }
    }
}

fn execute(options: &RunOptions, tx: &RunSender) -> Result<()> {
    let argv = build_args(options);
    let program = &argv[0];

    tracing::debug!(
        command = %shell_words::join(&argv),
        cwd = ?options.cwd,
        "spawning agent"
    );

    let mut command = Command::new(program);
    command
        .args(&argv[1..])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(cwd) = &options.cwd {
        command.current_dir(cwd);
    }

    let mut child = command.spawn().map_err(|e| {
        SpektError::Transport(format!(
            "failed to launch agent '{}': {}\n\
             Fix: ensure the command is installed and in PATH.",
            program, e
        ))
    })?;

    let stderr = child.stderr.take().map(drain_stderr);
    let Some(stdout) = child.stdout.take() else {
        reap(&mut child);
        return Err(SpektError::Transport(
            "agent stdout was not captured".to_string(),
        ));
    };

    let log = options
        .debug_log_dir
        .as_deref()
        .and_then(|dir| open_debug_log(dir, &options.label));

    if let Err(e) = forward_lines(stdout, tx, log) {
        reap(&mut child);
        return Err(e);
    }

    let status = child
        .wait()
        .map_err(|e| SpektError::Transport(format!("failed to wait for agent: {}", e)))?;
    let tail = stderr
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default();

    tracing::debug!(label = %options.label, %status, "agent exited");

    if status.success() {
        return Ok(());
    }

    let code = status
        .code()
        .map_or_else(|| "signal".to_string(), |code| code.to_string());
    let mut message = format!("agent exited with status {}", code);
    if !tail.is_empty() {
        message.push_str("\nstderr:\n");
        message.push_str(&tail);
    }
    Err(SpektError::Transport(message))
}

/// Read stdout line by line and forward every JSON object as an event.
///
/// When the consumer disconnects, the remaining output is still read (and
/// logged) so the child can run to completion.
fn forward_lines(stdout: impl Read, tx: &RunSender, mut log: Option<DebugLog>) -> Result<()> {
    let mut reader = BufReader::new(stdout);
    let mut line = Vec::new();
    let mut consumer_gone = false;

    loop {
        line.clear();
        let read = reader
            .by_ref()
            .take(MAX_LINE_BYTES + 1)
            .read_until(b'\n', &mut line)
            .map_err(|e| SpektError::Transport(format!("failed to read agent output: {}", e)))?;
        if read == 0 {
            return Ok(());
        }
        if !line.ends_with(b"\n") && line.len() as u64 > MAX_LINE_BYTES {
            return Err(SpektError::Transport(format!(
                "agent output line exceeds {} bytes",
                MAX_LINE_BYTES
            )));
        }

        let log_failed = log.as_mut().is_some_and(|debug_log| !debug_log.append(&line));
        if log_failed {
            log = None;
        }

        if consumer_gone {
            continue;
        }

        match Event::from_line(&line) {
            Some(event) => {
                if !tx.send_event(event) {
                    tracing::debug!("event consumer went away; draining agent output");
                    consumer_gone = true;
                }
            }
            None => {
                if !line.iter().all(u8::is_ascii_whitespace) {
                    tracing::trace!(
                        line = %String::from_utf8_lossy(line.trim_ascii()),
                        "skipping non-event line"
                    );
                }
            }
        }
    }
}

fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn drain_stderr(stderr: impl Read + Send + 'static) -> JoinHandle<String> {
    std::thread::spawn(move || {
        let mut reader = BufReader::new(stderr);
        let mut tail: VecDeque<String> = VecDeque::with_capacity(STDERR_TAIL_LINES);
        let mut line = Vec::new();

        loop {
            line.clear();
            match reader.read_until(b'\n', &mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {
                    if tail.len() == STDERR_TAIL_LINES {
                        tail.pop_front();
                    }
                    tail.push_back(String::from_utf8_lossy(line.trim_ascii_end()).into_owned());
                }
            }
        }

        Vec::from(tail).join("\n")
    })
}

/// Raw copy of every stdout line, for troubleshooting agent runs.
struct DebugLog {
    path: PathBuf,
    file: File,
}

impl DebugLog {
    /// Returns `false` once writing has failed; the log is abandoned then.
    fn append(&mut self, line: &[u8]) -> bool {
        let result = self.file.write_all(line).and_then(|()| {
            if line.ends_with(b"\n") {
                Ok(())
            } else {
                self.file.write_all(b"\n")
            }
        });
        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "debug log write failed");
                false
            }
        }
    }
}

/// File name for a raw-output log: `<YYYYmmdd-HHMMSS>-<label>.jsonl`.
pub(crate) fn debug_log_name(label: &str) -> String {
    let label: String = label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!(
        "{}-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S"),
        label
    )
}

fn open_debug_log(dir: &Path, label: &str) -> Option<DebugLog> {
    if let Err(e) = fs::create_dir_all(dir) {
        tracing::warn!(dir = %dir.display(), error = %e, "could not create debug log directory");
        return None;
    }

    let path = dir.join(debug_log_name(label));
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            tracing::debug!(path = %path.display(), "writing raw agent output");
            Some(DebugLog { path, file })
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not open debug log");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_log_name_shape() {
        let name = debug_log_name("plan auth/v2");
        assert!(name.ends_with("-plan-auth-v2.jsonl"));
        // YYYYmmdd-HHMMSS-
        let stamp = &name[..15];
        assert_eq!(stamp.as_bytes()[8], b'-');
        assert!(stamp.chars().filter(|c| *c != '-').all(|c| c.is_ascii_digit()));
    }
}
