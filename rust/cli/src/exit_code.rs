//! Exit codes returned by [`crate::run`].

pub const SUCCESS: i32 = 0;

/// Bad arguments, invalid configuration, unreadable input or failed writes.
pub const ERROR: i32 = 2;

/// The run stopped before finishing.
pub const INTERRUPTED: i32 = 130;
