//! In-band clarification questions.
//!
//! Agents pause for clarification by embedding a marker in their text output:
//!
//! ```text
//! <!--QUESTION:{"questions":[{"question":"Which DB?","header":"Database",
//!   "options":[{"label":"SQL"},{"label":"NoSQL","description":"Document store"}]}]}-->
//! ```
//!
//! A marker body may span several lines. A text may carry any number of markers.
//! A marker that is not valid JSON, or whose entries lack required fields,
//! contributes nothing. Detection never fails.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

static QUESTION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--QUESTION:(.*?)-->").expect("question marker pattern is valid")
});

/// A structured clarification request surfaced by the agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub question: String,
    /// Short category label for display.
    pub header: String,
    pub options: Vec<QuestionOption>,
    /// The agent accepts an arbitrary typed answer.
    pub free_text: bool,
}

/// One selectable answer to a [`Question`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionOption {
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize)]
struct Marker {
    questions: Vec<MarkerQuestion>,
}

#[derive(Deserialize)]
struct MarkerQuestion {
    question: String,
    #[serde(default)]
    header: String,
    #[serde(default)]
    options: Vec<QuestionOption>,
    #[serde(default, rename = "freeText")]
    free_text: bool,
}

impl From<MarkerQuestion> for Question {
    fn from(q: MarkerQuestion) -> Self {
        let free_text = q.free_text || q.options.is_empty();
        Question {
            question: q.question,
            header: q.header,
            options: q.options,
            free_text,
        }
    }
}

/// Extract every question embedded in `text`, in order of appearance.
pub fn detect_questions(text: &str) -> Vec<Question> {
    QUESTION_MARKER
        .captures_iter(text)
        .filter_map(|caps| {
            let body = caps.get(1)?.as_str();
            match serde_json::from_str::<Marker>(body.trim()) {
                Ok(marker) => Some(marker.questions),
                Err(e) => {
                    tracing::debug!(error = %e, "ignoring malformed question marker");
                    None
                }
            }
        })
        .flatten()
        .map(Question::from)
        .collect()
}
