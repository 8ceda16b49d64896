//! Exit code constants for the seam CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown unit, invalid config)
//! - 2: I/O failure (unreadable template/include, failed write)
//! - 3: No template units built

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown unit name, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// I/O failure: a template, include, or output artifact could not be
/// read or written.
pub const IO_FAILURE: i32 = 2;

/// No template units built: the templates root contained zero valid units.
pub const NO_UNITS_BUILT: i32 = 3;
