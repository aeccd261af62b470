//! Push a README to GitHub through the local `git` CLI.
//!
//! - **[`core`]**: Pure logic (URL construction, output decoding, step types).
//! - **[`io`]**: Side effects (settings file, token lookup, shell commands).
//!   Each side effect sits behind a trait so tests can script it.
//!
//! [`plan`] turns settings and a token into the six git command lines, and
//! [`deploy`] runs them in order.

pub mod core;
pub mod deploy;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod plan;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
