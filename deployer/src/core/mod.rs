//! Pure deploy logic (no I/O).
//!
//! All functions here are deterministic and testable without side effects.

pub mod decode;
pub mod remote;
pub mod shell;
pub mod types;
