//! Prompt assembly for agent invocations.
//!
//! The first prompt of a conversation tells the agent where the project's
//! knowledge base lives, then hands it the document to work on:
//!
//! ```text
//! <knowledge hint>
//!
//! ---
//!
//! # Specification to Plan
//!
//! <content>
//! ```
//!
//! Content is trusted markdown and is inserted verbatim.

/// Directory holding supplementary project knowledge, relative to the project root.
pub const KNOWLEDGE_DIR: &str = ".spektacular/knowledge/";

/// Heading used when the caller does not supply one.
pub const DEFAULT_HEADER: &str = "Specification to Plan";

const PLANNER_SYSTEM_PROMPT: &str = include_str!("../../defaults/planner-agent.md");

/// Build a prompt under the default "Specification to Plan" heading.
pub fn build_prompt(content: &str) -> String {
    build_prompt_with_header(content, DEFAULT_HEADER)
}

/// Build a prompt with a custom heading.
pub fn build_prompt_with_header(content: &str, header: &str) -> String {
    format!(
        "Supplementary project knowledge (conventions, architecture notes, learnings and gotchas) \
         is available in `{KNOWLEDGE_DIR}`. Explore that directory with your own tools before \
         you start, and read whatever is relevant.\n\n---\n\n# {header}\n\n{content}"
    )
}

/// System prompt for the planning agent.
///
/// Instructs the agent to produce an implementation plan and to ask
/// clarification questions using the `<!--QUESTION:...-->` marker.
pub fn planner_system_prompt() -> &'static str {
    PLANNER_SYSTEM_PROMPT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::detect_questions;

    #[test]
    fn test_build_prompt_contains_content_and_knowledge_hint() {
        let prompt = build_prompt("my spec");
        assert!(prompt.contains("my spec"));
        assert!(prompt.contains(".spektacular/knowledge/"));
        assert!(prompt.contains("# Specification to Plan"));
    }

    #[test]
    fn test_build_prompt_with_header_uses_custom_header() {
        let prompt = build_prompt_with_header("plan content", "Implementation Plan");
        assert!(prompt.contains("# Implementation Plan"));
        assert!(prompt.contains("plan content"));
        assert!(prompt.contains(".spektacular/knowledge/"));
        assert!(!prompt.contains(DEFAULT_HEADER));
    }

    #[test]
    fn test_content_follows_heading_verbatim() {
        let content = "# Title\n\n- {braces} and <!-- comments --> stay as-is\n";
        let prompt = build_prompt(content);
        assert!(prompt.ends_with(&format!("# Specification to Plan\n\n{content}")));
    }

    #[test]
    fn test_separator_between_hint_and_heading() {
        let prompt = build_prompt("x");
        let hint_end = prompt.find(KNOWLEDGE_DIR).unwrap();
        let separator = prompt.find("\n---\n").unwrap();
        let heading = prompt.find("# Specification").unwrap();
        assert!(hint_end < separator && separator < heading);
    }

    #[test]
    fn test_planner_prompt_documents_question_marker() {
        let prompt = planner_system_prompt();
        assert!(prompt.contains("<!--QUESTION:"));
        // The example embedded in the instructions must itself be detectable.
        assert!(!detect_questions(prompt).is_empty());
    }
}
