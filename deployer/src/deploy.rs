//! Orchestration for `deployer deploy`.
//!
//! Runs every planned command in order. A failed step is printed and recorded
//! but never stops the steps after it; only the confirmation banner depends on
//! an outcome, and only on the push.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, instrument, warn};

use crate::core::remote::repository_url;
use crate::core::types::{DeployOutcome, DeployStep, StepOutcome};
use crate::io::config::DeployConfig;
use crate::io::process::{CommandRunner, run_echoed};
use crate::plan::plan_commands;

/// Run the full deploy sequence with an already resolved token.
///
/// Returns `Err` only when writing to `out` fails; step failures are part of
/// the returned [`DeployOutcome`].
#[instrument(skip_all, fields(account = %cfg.account, repo = %cfg.repo))]
pub fn run_deploy<R: CommandRunner, W: Write>(
    cfg: &DeployConfig,
    token: &str,
    runner: &R,
    out: &mut W,
) -> Result<DeployOutcome> {
    writeln!(out, "📄 Deploying {} to {}...\n", cfg.file, cfg.branch)
        .context("write deploy header")?;

    let mut steps = Vec::with_capacity(DeployStep::ALL.len());
    for planned in plan_commands(cfg, token) {
        let success = run_echoed(runner, &planned.command, &planned.redacted, out)?;
        steps.push(StepOutcome {
            step: planned.step,
            success,
        });
    }

    let outcome = DeployOutcome {
        steps,
        repository_url: repository_url(&cfg.host, &cfg.account, &cfg.repo),
    };

    if outcome.pushed() {
        writeln!(out, "\n✅ {} updated!", cfg.file).context("write confirmation")?;
        writeln!(out, "📄 {}", outcome.repository_url).context("write repository url")?;
        info!(url = %outcome.repository_url, "push succeeded");
    } else {
        let failed: Vec<&str> = outcome
            .failed_steps()
            .into_iter()
            .map(DeployStep::label)
            .collect();
        warn!(failed = ?failed, "push did not succeed");
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedRunner;

    #[test]
    fn banner_printed_when_push_succeeds() {
        let runner = ScriptedRunner::always(true);
        let mut buf = Vec::new();
        let outcome =
            run_deploy(&DeployConfig::default(), "abc123", &runner, &mut buf).expect("deploy");
        let text = String::from_utf8(buf).expect("utf8");

        assert!(outcome.pushed());
        assert!(text.starts_with("📄 Deploying README.md to main...\n\n"));
        assert!(text.ends_with("\n✅ README.md updated!\n📄 https://github.com/swensi17/neo\n"));
    }

    #[test]
    fn banner_gated_on_push_alone() {
        // Every step before the push fails; push succeeds.
        let runner = ScriptedRunner::new(vec![false, false, false, false, false, true]);
        let mut buf = Vec::new();
        let outcome =
            run_deploy(&DeployConfig::default(), "abc123", &runner, &mut buf).expect("deploy");

        assert!(outcome.pushed());
        assert_eq!(outcome.failed_steps().len(), 5);
        assert!(String::from_utf8(buf).expect("utf8").contains("✅"));
    }

    #[test]
    fn no_banner_when_push_fails() {
        let runner = ScriptedRunner::new(vec![true, true, true, true, true, false]);
        let mut buf = Vec::new();
        let outcome =
            run_deploy(&DeployConfig::default(), "abc123", &runner, &mut buf).expect("deploy");
        let text = String::from_utf8(buf).expect("utf8");

        assert!(!outcome.pushed());
        assert!(!text.contains("✅"));
        assert!(!text.contains("https://github.com/swensi17/neo\n"));
    }

    #[test]
    fn echo_never_contains_token() {
        let runner = ScriptedRunner::always(true);
        let mut buf = Vec::new();
        run_deploy(&DeployConfig::default(), "s3cr3t", &runner, &mut buf).expect("deploy");
        let text = String::from_utf8(buf).expect("utf8");

        assert!(!text.contains("s3cr3t"));
        assert!(text.contains(">>> git remote set-url origin https://***@github.com/swensi17/neo.git"));
        // the runner still receives the real URL
        assert!(runner.commands()[2].contains("https://s3cr3t@github.com/swensi17/neo.git"));
    }
}
