//! Configuration model for spektacular.
//!
//! This module defines the Config struct that represents `.spektacular/config.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of config values.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

pub use model::Config;
pub use types::{AgentConfig, DebugConfig, SessionConfig};
