//! Exit code constants for the spektacular CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid project layout, bad config, unknown runner)
//! - 3: Transport failure (agent process could not run or exited abnormally)
//! - 4: Session failure (agent reported an error or the conversation broke down)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid state, config or registry problems.
pub const USER_ERROR: i32 = 1;

/// Transport failure: launch, pipe, nonzero exit, or oversized output line.
pub const TRANSPORT_FAILURE: i32 = 3;

/// Session failure: agent-reported error or a broken question/resume cycle.
pub const SESSION_FAILURE: i32 = 4;
