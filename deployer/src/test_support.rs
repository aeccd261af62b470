//! Test-only doubles for the runner and prompt seams.

use std::cell::RefCell;
use std::collections::VecDeque;

use anyhow::{Result, anyhow};

use crate::io::credentials::TokenPrompt;
use crate::io::process::{CommandOutput, CommandRunner};

/// Command runner that records every command and replays scripted results.
///
/// Once the script is exhausted every further command reports failure.
pub struct ScriptedRunner {
    results: RefCell<VecDeque<bool>>,
    fallback: Option<bool>,
    commands: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    /// Replay `results` in order, one per command.
    pub fn new(results: Vec<bool>) -> Self {
        Self {
            results: RefCell::new(results.into()),
            fallback: None,
            commands: RefCell::new(Vec::new()),
        }
    }

    /// Report the same result for every command.
    pub fn always(success: bool) -> Self {
        Self {
            results: RefCell::new(VecDeque::new()),
            fallback: Some(success),
            commands: RefCell::new(Vec::new()),
        }
    }

    /// Commands received so far, in call order.
    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &str) -> Result<CommandOutput> {
        self.commands.borrow_mut().push(command.to_string());
        let success = self
            .results
            .borrow_mut()
            .pop_front()
            .or(self.fallback)
            .unwrap_or(false);
        Ok(CommandOutput {
            success,
            code: Some(if success { 0 } else { 1 }),
            stdout: String::new(),
            stderr: if success {
                String::new()
            } else {
                format!("scripted failure: {command}")
            },
        })
    }
}

/// Runner whose every invocation errors, as if no shell could be spawned.
pub struct BrokenRunner;

impl CommandRunner for BrokenRunner {
    fn run(&self, _command: &str) -> Result<CommandOutput> {
        Err(anyhow!("spawn shell: No such file or directory"))
    }
}

/// Prompt that returns a fixed answer and counts how often it was asked.
pub struct ScriptedPrompt {
    answer: String,
    asked: RefCell<u32>,
}

impl ScriptedPrompt {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            asked: RefCell::new(0),
        }
    }

    pub fn times_asked(&self) -> u32 {
        *self.asked.borrow()
    }
}

impl TokenPrompt for ScriptedPrompt {
    fn ask(&self, _message: &str) -> Result<String> {
        *self.asked.borrow_mut() += 1;
        Ok(self.answer.clone())
    }
}
