//! Multi-turn conversation driver.
//!
//! A session sends a prompt, streams the agent's events to an observer, and
//! when the agent pauses with clarification questions, asks the observer for
//! an answer and resumes the same conversation with it. This repeats until
//! the agent produces a final result or something fails.
//!
//! ```text
//! Sending ──► AwaitingAnswer ──► Sending ──► ... ──► Done
//!    │               │
//!    └───────────────┴──────────────────────────────► Failed
//! ```

use crate::error::{Result, SpektError};
use crate::runner::{Event, Question, RunOptions, Runner, ToolUse, detect_questions};

/// Receives a conversation's progress and supplies answers to questions.
pub trait SessionObserver {
    /// Non-empty text produced by the agent.
    fn on_text(&mut self, text: &str);

    /// A tool invocation reported by the agent.
    fn on_tool_use(&mut self, _tool: &ToolUse) {}

    /// Answer the agent's questions. The returned text becomes the next prompt.
    ///
    /// Blocks the conversation until it returns. An error ends the session.
    fn on_question(&mut self, questions: &[Question]) -> Result<String>;
}

/// Where a conversation stands between turns.
#[derive(Debug)]
pub enum SessionState {
    /// About to invoke the agent with this prompt.
    Sending(String),
    /// The agent paused with questions that need an answer.
    AwaitingAnswer(Vec<Question>),
    /// The agent finished with this result text.
    Done(String),
    Failed(SpektError),
}

/// How a single agent invocation ended.
#[derive(Debug)]
pub enum TurnOutcome {
    Completed(String),
    Questions(Vec<Question>),
    Failed(SpektError),
}

/// Everything learned from one agent invocation.
#[derive(Debug)]
pub struct Turn {
    pub outcome: TurnOutcome,
    /// First session id seen during the turn.
    pub session_id: Option<String>,
}

/// Run one agent invocation, fully draining both of its streams.
///
/// Precedence once the event stream closes: an agent-reported error, then a
/// transport error, then any questions, then the result. A turn with none of
/// these fails.
pub fn run_turn(
    runner: &dyn Runner,
    options: RunOptions,
    observer: &mut dyn SessionObserver,
) -> Turn {
    let streams = runner.run(options);

    let mut session_id: Option<String> = None;
    let mut questions = Vec::new();
    let mut result: Option<String> = None;
    let mut reported: Option<String> = None;

    for event in streams.events.iter() {
        if session_id.is_none()
            && let Some(id) = event.session_id()
        {
            tracing::debug!(session_id = id, "captured session id");
            session_id = Some(id.to_string());
        }

        match &event {
            Event::Assistant(_) => {
                let text = event.text_content();
                if !text.is_empty() {
                    observer.on_text(&text);
                    questions.extend(detect_questions(&text));
                }
                for tool in event.tool_uses() {
                    observer.on_tool_use(tool);
                }
            }
            Event::Result(_) if event.is_error() => {
                if reported.is_none() {
                    reported = Some(event.result_text().to_string());
                }
            }
            Event::Result(_) => {
                result = Some(event.result_text().to_string());
            }
            Event::System(_) | Event::Unknown(_) => {}
        }
    }

    let transport = streams.errors.recv().ok();

    let outcome = if let Some(message) = reported {
        TurnOutcome::Failed(SpektError::AgentReported(message))
    } else if let Some(error) = transport {
        TurnOutcome::Failed(error)
    } else if !questions.is_empty() {
        TurnOutcome::Questions(questions)
    } else if let Some(result) = result {
        TurnOutcome::Completed(result)
    } else {
        TurnOutcome::Failed(SpektError::SessionError(
            "agent exited without producing a result".to_string(),
        ))
    };

    Turn {
        outcome,
        session_id,
    }
}

/// Drive a conversation to completion and return the agent's final result.
///
/// The first session id reported by the agent is kept for the rest of the
/// conversation; every answer resumes that conversation. More than
/// `max_turns` invocations fail the session.
///
/// # Errors
///
/// - `SpektError::Transport` if an invocation terminated abnormally
/// - `SpektError::AgentReported` if the agent flagged its result as an error
/// - `SpektError::SessionError` for protocol failures (no result, nothing to
///   resume, turn cap exceeded)
/// - whatever `on_question` returns when no answer is available
pub fn run_session(
    runner: &dyn Runner,
    initial: RunOptions,
    max_turns: u32,
    observer: &mut dyn SessionObserver,
) -> Result<String> {
    let mut session_id = initial.session_id.clone();
    let mut turns = 0u32;
    let mut state = SessionState::Sending(initial.prompt.clone());

    loop {
        state = match state {
            SessionState::Sending(prompt) => {
                if turns >= max_turns {
                    SessionState::Failed(SpektError::SessionError(format!(
                        "exceeded maximum of {} turns",
                        max_turns
                    )))
                } else {
                    turns += 1;
                    tracing::info!(turn = turns, label = %initial.label, "sending prompt to agent");

                    let options = match &session_id {
                        Some(id) => initial.resume(prompt, id.as_str()),
                        None => RunOptions {
                            prompt,
                            ..initial.clone()
                        },
                    };
                    let turn = run_turn(runner, options, observer);

                    match (&session_id, turn.session_id) {
                        (None, captured) => session_id = captured,
                        (Some(kept), Some(seen)) if *kept != seen => {
                            tracing::debug!(kept = %kept, seen = %seen, "ignoring new session id");
                        }
                        _ => {}
                    }

                    match turn.outcome {
                        TurnOutcome::Completed(result) => SessionState::Done(result),
                        TurnOutcome::Questions(questions) => {
                            SessionState::AwaitingAnswer(questions)
                        }
                        TurnOutcome::Failed(error) => SessionState::Failed(error),
                    }
                }
            }
            SessionState::AwaitingAnswer(questions) => {
                tracing::debug!(count = questions.len(), "agent is waiting for answers");
                if session_id.is_none() {
                    SessionState::Failed(SpektError::SessionError(
                        "cannot resume: no session id".to_string(),
                    ))
                } else {
                    match observer.on_question(&questions) {
                        Ok(answer) => SessionState::Sending(answer),
                        Err(error) => SessionState::Failed(error),
                    }
                }
            }
            SessionState::Done(result) => {
                tracing::info!(turns, "session finished");
                return Ok(result);
            }
            SessionState::Failed(error) => {
                tracing::warn!(turns, error = %error, "session failed");
                return Err(error);
            }
        };
    }
}
