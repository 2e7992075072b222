//! Session observers for the plan command.
//!
//! [`TerminalObserver`] asks the user; [`BatchObserver`] answers on its own so
//! planning can run unattended. Both echo the agent's text to their output.

use crate::error::{Result, SpektError};
use crate::runner::{Question, ToolUse};
use crate::session::SessionObserver;
use std::io::{BufRead, Write};

/// Sent for free-text questions when nobody is there to answer.
pub const BEST_JUDGEMENT: &str =
    "No answer is available. Use your best judgement, state the assumption you made, and continue.";

/// Prints agent output and reads answers from a line-oriented input.
///
/// A number selects that option's label; anything else is sent verbatim.
pub struct TerminalObserver<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalObserver<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &Question) -> Result<String> {
        print_question(&mut self.output, question);
        if question.free_text {
            let _ = writeln!(self.output, "  (or type your own answer)");
        }

        loop {
            let _ = write!(self.output, "> ");
            let _ = self.output.flush();

            let mut line = String::new();
            let read = self.input.read_line(&mut line).map_err(|e| {
                SpektError::SessionError(format!("answer unavailable: {}", e))
            })?;
            if read == 0 {
                return Err(SpektError::SessionError(
                    "answer unavailable: input closed".to_string(),
                ));
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            return Ok(resolve_answer(question, line));
        }
    }
}

impl<R: BufRead, W: Write> SessionObserver for TerminalObserver<R, W> {
    fn on_text(&mut self, text: &str) {
        let _ = writeln!(self.output, "{}", text);
    }

    fn on_tool_use(&mut self, tool: &ToolUse) {
        let _ = writeln!(self.output, "  -> {}", tool.name);
    }

    fn on_question(&mut self, questions: &[Question]) -> Result<String> {
        let mut answers = Vec::with_capacity(questions.len());
        for question in questions {
            answers.push(self.ask(question)?);
        }
        Ok(combine_answers(questions, &answers))
    }
}

/// Answers every question without user input.
pub struct BatchObserver<W> {
    output: W,
}

impl<W: Write> BatchObserver<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }
}

impl<W: Write> SessionObserver for BatchObserver<W> {
    fn on_text(&mut self, text: &str) {
        let _ = writeln!(self.output, "{}", text);
    }

    fn on_question(&mut self, questions: &[Question]) -> Result<String> {
        let answers: Vec<String> = questions.iter().map(automatic_answer).collect();
        for (question, answer) in questions.iter().zip(&answers) {
            let _ = writeln!(self.output, "[auto] {} -> {}", question.question, answer);
        }
        Ok(combine_answers(questions, &answers))
    }
}

/// First option's label, or [`BEST_JUDGEMENT`] when there are no options.
pub fn automatic_answer(question: &Question) -> String {
    question
        .options
        .first()
        .map(|option| option.label.clone())
        .unwrap_or_else(|| BEST_JUDGEMENT.to_string())
}

/// Map typed input to an answer: `1`-based option numbers pick the label.
pub fn resolve_answer(question: &Question, input: &str) -> String {
    input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| question.options.get(i))
        .map(|option| option.label.clone())
        .unwrap_or_else(|| input.to_string())
}

/// Turn per-question answers into the next prompt.
///
/// A single answer is sent as-is. Several are paired with their questions.
pub fn combine_answers(questions: &[Question], answers: &[String]) -> String {
    if let [answer] = answers {
        return answer.clone();
    }
    questions
        .iter()
        .zip(answers)
        .map(|(question, answer)| format!("{}\n{}", question.question, answer))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn print_question(output: &mut impl Write, question: &Question) {
    let _ = writeln!(output);
    if question.header.is_empty() {
        let _ = writeln!(output, "? {}", question.question);
    } else {
        let _ = writeln!(output, "? [{}] {}", question.header, question.question);
    }
    for (i, option) in question.options.iter().enumerate() {
        match &option.description {
            Some(description) => {
                let _ = writeln!(output, "  {}. {} - {}", i + 1, option.label, description);
            }
            None => {
                let _ = writeln!(output, "  {}. {}", i + 1, option.label);
            }
        }
    }
}
