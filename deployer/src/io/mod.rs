//! I/O helpers for deployer commands.

pub mod config;
pub mod credentials;
pub mod process;
