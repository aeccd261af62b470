//! Shared deterministic types for the deploy sequence.

/// One step of the fixed deploy sequence, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStep {
    SetEmail,
    SetName,
    SetRemote,
    Stage,
    Commit,
    Push,
}

impl DeployStep {
    /// Every step, in the order the sequence runs them.
    pub const ALL: [DeployStep; 6] = [
        DeployStep::SetEmail,
        DeployStep::SetName,
        DeployStep::SetRemote,
        DeployStep::Stage,
        DeployStep::Commit,
        DeployStep::Push,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DeployStep::SetEmail => "set-email",
            DeployStep::SetName => "set-name",
            DeployStep::SetRemote => "set-remote",
            DeployStep::Stage => "stage",
            DeployStep::Commit => "commit",
            DeployStep::Push => "push",
        }
    }
}

/// A shell command line paired with the form that is safe to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCommand {
    pub step: DeployStep,
    /// Exact command line handed to the shell.
    pub command: String,
    /// Same command with the credential token masked.
    pub redacted: String,
}

/// Observed result of a single executed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: DeployStep,
    pub success: bool,
}

/// Result of one full pass over the deploy sequence.
///
/// Earlier failures never stop later steps, so `steps` always holds every
/// step that was attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    pub steps: Vec<StepOutcome>,
    /// Browsable repository URL, printed only when the push succeeded.
    pub repository_url: String,
}

impl DeployOutcome {
    /// True only when the push step reported success.
    pub fn pushed(&self) -> bool {
        self.steps
            .iter()
            .any(|outcome| outcome.step == DeployStep::Push && outcome.success)
    }

    pub fn failed_steps(&self) -> Vec<DeployStep> {
        self.steps
            .iter()
            .filter(|outcome| !outcome.success)
            .map(|outcome| outcome.step)
            .collect()
    }
}
