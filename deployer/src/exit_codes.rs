//! Stable exit codes for deployer CLI commands.

/// The command ran to completion. For `deploy` this holds whatever the
/// individual git steps reported.
pub const OK: i32 = 0;
/// Settings, env file or stdin could not be read.
pub const INVALID: i32 = 1;
