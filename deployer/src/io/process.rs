//! Shell command execution for the deploy sequence.
//!
//! Each step is a full shell command line, already quoted for the platform
//! shell (see [`crate::core::shell`]). The runner blocks until the child exits;
//! there is no timeout and no retry.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use tracing::{debug, error, instrument, warn};

use crate::core::decode::decode_ignoring_invalid;

/// Captured child process output, already decoded to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Executes one shell command line to completion.
pub trait CommandRunner {
    fn run(&self, command: &str) -> Result<CommandOutput>;
}

/// Runs commands through the platform shell in a fixed working directory.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    workdir: PathBuf,
}

impl ShellRunner {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<CommandOutput> {
        let output = shell_command(command)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .output()
            .context("spawn shell")?;
        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: decode_ignoring_invalid(&output.stdout),
            stderr: decode_ignoring_invalid(&output.stderr),
        })
    }
}

#[cfg(unix)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

// The line is already quoted for cmd; `raw_arg` keeps std from re-escaping
// its double quotes as `\"`, which cmd does not understand.
#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    use std::os::windows::process::CommandExt;

    let mut cmd = Command::new("cmd");
    cmd.arg("/C").raw_arg(command);
    cmd
}

/// Echo `command`, run it, print whatever it wrote, report success.
///
/// `echoed` is the form printed and logged (token already masked). A runner
/// error such as a failed spawn is printed and counted as failure, so the
/// caller never has to abort the sequence.
#[instrument(skip_all, fields(command = %echoed))]
pub fn run_echoed<R: CommandRunner, W: Write>(
    runner: &R,
    command: &str,
    echoed: &str,
    out: &mut W,
) -> Result<bool> {
    writeln!(out, ">>> {echoed}").context("write command echo")?;
    let output = match runner.run(command) {
        Ok(output) => output,
        Err(err) => {
            error!(err = %err, "command could not be run");
            writeln!(out, "{err:#}").context("write runner error")?;
            return Ok(false);
        }
    };
    if !output.stdout.is_empty() {
        writeln!(out, "{}", output.stdout).context("write command stdout")?;
    }
    if !output.stderr.is_empty() {
        writeln!(out, "{}", output.stderr).context("write command stderr")?;
    }
    if output.success {
        debug!(exit_code = ?output.code, "command succeeded");
    } else {
        warn!(exit_code = ?output.code, "command failed");
    }
    Ok(output.success)
}
