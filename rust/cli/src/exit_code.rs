//! Exit codes returned by [`crate::run`].

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// Any failure: bad arguments, unreadable configuration, engine errors.
pub const ERROR: i32 = 2;
