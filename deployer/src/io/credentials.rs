//! Credential token resolution.
//!
//! The token comes from a `<KEY>=<token>` line in the env file next to the
//! working copy. When the file is missing or has no such line the operator is
//! asked for it on stdin. Neither path validates the token.

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

pub const PROMPT_TEXT: &str = "Enter GitHub token: ";

/// Source of an interactively entered token.
pub trait TokenPrompt {
    /// Show `message` and return one raw line of input.
    fn ask(&self, message: &str) -> Result<String>;
}

/// Prompt on stdout, read one line from stdin.
pub struct StdinPrompt;

impl TokenPrompt for StdinPrompt {
    fn ask(&self, message: &str) -> Result<String> {
        let mut stdout = std::io::stdout();
        stdout
            .write_all(message.as_bytes())
            .context("write token prompt")?;
        stdout.flush().context("flush token prompt")?;

        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("read token from stdin")?;
        Ok(line)
    }
}

/// Scan env file contents for the first line starting with `prefix`.
///
/// Returns the text after the first `=`, trimmed. The prefix test is literal,
/// so indented lines do not match.
pub fn find_token(contents: &str, prefix: &str) -> Option<String> {
    contents
        .lines()
        .find(|line| line.starts_with(prefix))
        .and_then(|line| line.split_once('='))
        .map(|(_, value)| value.trim().to_string())
}

/// Read the token from `env_path`, falling back to `prompt`.
///
/// A missing env file is not an error. An env file that exists but cannot be
/// read is.
#[instrument(skip_all, fields(env_file = %env_path.display()))]
pub fn resolve_token<P: TokenPrompt>(env_path: &Path, prefix: &str, prompt: &P) -> Result<String> {
    if env_path.exists() {
        let contents = fs::read_to_string(env_path)
            .with_context(|| format!("read {}", env_path.display()))?;
        if let Some(token) = find_token(&contents, prefix) {
            debug!("token read from env file");
            return Ok(token);
        }
        info!(prefix, "env file has no token line, prompting");
    } else {
        debug!("env file missing, prompting");
    }
    let raw = prompt.ask(PROMPT_TEXT)?;
    Ok(raw.trim().to_string())
}
