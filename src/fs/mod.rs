//! Filesystem helpers for spektacular.
//!
//! Config, spec, and plan files are only ever written through these helpers,
//! so a crash mid-write never leaves a truncated document behind.

mod atomic;

pub use atomic::{atomic_write_file, write_new_file};
