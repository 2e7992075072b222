//! Error types for spektacular.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Decode noise on the agent's output stream and malformed question markers are
//! deliberately absent here: they never escalate to errors.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for spektacular operations.
#[derive(Error, Debug)]
pub enum SpektError {
    /// User provided invalid arguments or the project is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// Configuration could not be parsed or failed validation.
    #[error("{0}")]
    ConfigError(String),

    /// The configured agent command has no registered runner.
    #[error("unsupported runner: {name:?} (available: [{}])", available.join(", "))]
    UnsupportedRunner {
        /// The requested runner name.
        name: String,
        /// Registered runner names, sorted.
        available: Vec<String>,
    },

    /// The agent process failed to launch, broke its pipe, or exited abnormally.
    #[error("agent transport failed: {0}")]
    Transport(String),

    /// The agent finished with a result flagged as an error.
    #[error("agent reported an error: {0}")]
    AgentReported(String),

    /// The question/resume cycle could not continue.
    #[error("session failed: {0}")]
    SessionError(String),
}

impl SpektError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SpektError::UserError(_)
            | SpektError::ConfigError(_)
            | SpektError::UnsupportedRunner { .. } => exit_codes::USER_ERROR,
            SpektError::Transport(_) => exit_codes::TRANSPORT_FAILURE,
            SpektError::AgentReported(_) | SpektError::SessionError(_) => {
                exit_codes::SESSION_FAILURE
            }
        }
    }
}

/// Result type alias for spektacular operations.
pub type Result<T> = std::result::Result<T, SpektError>;
