//! Canonical representation of agent output.
//!
//! Each non-empty stdout line of an agent process that decodes to a JSON object
//! becomes one [`Event`]. The variant is chosen solely from the object's `type`
//! field; anything else lands in [`Event::Unknown`] and is still forwarded so
//! consumers can see it.
//!
//! Typed fields are extracted leniently: a field of the wrong shape degrades to
//! its empty value instead of failing. Every variant keeps the full decoded
//! object as its payload.
//!
//! # Wire format
//!
//! ```text
//! {"type":"system","session_id":"abc", ...}
//! {"type":"assistant","message":{"content":[{"type":"text","text":"..."},{"type":"tool_use","name":"Bash","input":{...}}]}}
//! {"type":"result","result":"...","is_error":false}
//! ```

use serde_json::{Map, Value};
use std::fmt;

/// The raw decoded JSON object behind an event.
pub type Payload = Map<String, Value>;

/// Discriminant of an [`Event`], derived from the payload's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    System,
    Assistant,
    Result,
    Unknown,
}

impl EventKind {
    fn from_type_field(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("system") => EventKind::System,
            Some("assistant") => EventKind::Assistant,
            Some("result") => EventKind::Result,
            _ => EventKind::Unknown,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::System => write!(f, "system"),
            EventKind::Assistant => write!(f, "assistant"),
            EventKind::Result => write!(f, "result"),
            EventKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Session initialization emitted once at the start of each invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemEvent {
    pub session_id: Option<String>,
    pub payload: Payload,
}

/// One assistant message, made of ordered content blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantEvent {
    pub session_id: Option<String>,
    pub content: Vec<ContentBlock>,
    pub payload: Payload,
}

/// Terminal outcome of an invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEvent {
    pub session_id: Option<String>,
    pub result: String,
    pub is_error: bool,
    pub payload: Payload,
}

/// A content block inside an assistant message.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Text(String),
    ToolUse(ToolUse),
    /// Any other block type (thinking, images, ...), kept verbatim.
    Other(Value),
}

/// A tool invocation requested by the agent.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolUse {
    pub id: Option<String>,
    pub name: String,
    pub input: Value,
}

/// One parsed unit of backend output.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    System(SystemEvent),
    Assistant(AssistantEvent),
    Result(ResultEvent),
    Unknown(Payload),
}

impl Event {
    /// Build an event from a decoded JSON object.
    ///
    /// Total: every object yields an event.
    pub fn from_payload(payload: Payload) -> Self {
        let session_id = string_field(&payload, "session_id");

        match EventKind::from_type_field(payload.get("type")) {
            EventKind::System => Event::System(SystemEvent {
                session_id,
                payload,
            }),
            EventKind::Assistant => {
                let content = payload
                    .get("message")
                    .and_then(|m| m.get("content"))
                    .and_then(Value::as_array)
                    .map(|blocks| blocks.iter().map(ContentBlock::from_value).collect())
                    .unwrap_or_default();
                Event::Assistant(AssistantEvent {
                    session_id,
                    content,
                    payload,
                })
            }
            EventKind::Result => Event::Result(ResultEvent {
                session_id,
                result: string_field(&payload, "result").unwrap_or_default(),
                is_error: payload
                    .get("is_error")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
                payload,
            }),
            EventKind::Unknown => Event::Unknown(payload),
        }
    }

    /// Decode one line of agent output.
    ///
    /// Returns `None` for blank lines, invalid JSON, and JSON that is not an
    /// object. Those lines are noise and are skipped.
    pub fn from_line(line: &[u8]) -> Option<Self> {
        if line.iter().all(u8::is_ascii_whitespace) {
            return None;
        }
        match serde_json::from_slice::<Value>(line) {
            Ok(Value::Object(payload)) => Some(Self::from_payload(payload)),
            _ => None,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::System(_) => EventKind::System,
            Event::Assistant(_) => EventKind::Assistant,
            Event::Result(_) => EventKind::Result,
            Event::Unknown(_) => EventKind::Unknown,
        }
    }

    /// The full decoded object this event was built from.
    pub fn payload(&self) -> &Payload {
        match self {
            Event::System(e) => &e.payload,
            Event::Assistant(e) => &e.payload,
            Event::Result(e) => &e.payload,
            Event::Unknown(payload) => payload,
        }
    }

    /// Session identifier carried by this event, if any.
    ///
    /// Present on system events and optionally on others.
    pub fn session_id(&self) -> Option<&str> {
        let id = match self {
            Event::System(e) => e.session_id.as_deref(),
            Event::Assistant(e) => e.session_id.as_deref(),
            Event::Result(e) => e.session_id.as_deref(),
            Event::Unknown(payload) => payload.get("session_id").and_then(Value::as_str),
        };
        id.filter(|s| !s.is_empty())
    }

    pub fn is_result(&self) -> bool {
        matches!(self, Event::Result(_))
    }

    /// True only for result events flagged `is_error`.
    pub fn is_error(&self) -> bool {
        matches!(self, Event::Result(ResultEvent { is_error: true, .. }))
    }

    /// Final result text; empty for non-result events.
    pub fn result_text(&self) -> &str {
        match self {
            Event::Result(e) => &e.result,
            _ => "",
        }
    }

    /// All text blocks of an assistant message joined with newlines.
    ///
    /// Empty for non-assistant events.
    pub fn text_content(&self) -> String {
        let Event::Assistant(e) = self else {
            return String::new();
        };
        e.content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Every tool invocation in an assistant message, in order.
    pub fn tool_uses(&self) -> Vec<&ToolUse> {
        let Event::Assistant(e) = self else {
            return Vec::new();
        };
        e.content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::ToolUse(tool) => Some(tool),
                _ => None,
            })
            .collect()
    }
}

impl ContentBlock {
    fn from_value(value: &Value) -> Self {
        match value.get("type").and_then(Value::as_str) {
            Some("text") => ContentBlock::Text(
                value
                    .get("text")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            ),
            Some("tool_use") => ContentBlock::ToolUse(ToolUse {
                id: value.get("id").and_then(Value::as_str).map(str::to_string),
                name: value
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                input: value.get("input").cloned().unwrap_or(Value::Null),
            }),
            _ => ContentBlock::Other(value.clone()),
        }
    }
}

fn string_field(payload: &Payload, key: &str) -> Option<String> {
    payload.get(key).and_then(Value::as_str).map(str::to_string)
}
