//! The fixed deploy command sequence.
//!
//! Commands are built as argument vectors and joined with the quoting of the
//! shell that will run them, so a settings value with spaces (the commit
//! message) stays a single argument.

use crate::core::remote::{REDACTED, authenticated_remote_url};
use crate::core::shell::ShellFlavor;
use crate::core::types::{DeployStep, PlannedCommand};
use crate::io::config::DeployConfig;

/// Build the six deploy commands, in execution order, for the native shell.
pub fn plan_commands(cfg: &DeployConfig, token: &str) -> Vec<PlannedCommand> {
    plan_commands_for(cfg, token, ShellFlavor::native())
}

/// Build the six deploy commands quoted for `flavor`.
///
/// The redacted form is built from a URL that never held the token, so no
/// quoting of the token can leak it and no other text is masked by accident.
pub fn plan_commands_for(
    cfg: &DeployConfig,
    token: &str,
    flavor: ShellFlavor,
) -> Vec<PlannedCommand> {
    let remote_url = authenticated_remote_url(token, &cfg.host, &cfg.account, &cfg.repo);
    let masked_url = authenticated_remote_url(REDACTED, &cfg.host, &cfg.account, &cfg.repo);
    DeployStep::ALL
        .iter()
        .map(|&step| PlannedCommand {
            step,
            command: flavor.join(&step_args(step, cfg, &remote_url)),
            redacted: join_masked(flavor, &step_args(step, cfg, &masked_url), &masked_url),
        })
        .collect()
}

/// Like [`ShellFlavor::join`], but prints the masked URL verbatim.
///
/// The masked line is only echoed, never executed. Host, account and repo
/// carry no whitespace (checked by `DeployConfig::validate`).
fn join_masked(flavor: ShellFlavor, args: &[String], masked_url: &str) -> String {
    args.iter()
        .map(|arg| {
            if arg == masked_url {
                arg.clone()
            } else {
                flavor.quote(arg)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn step_args(step: DeployStep, cfg: &DeployConfig, remote_url: &str) -> Vec<String> {
    let args: Vec<&str> = match step {
        DeployStep::SetEmail => vec!["config", "user.email", &cfg.identity.email],
        DeployStep::SetName => vec!["config", "user.name", &cfg.identity.name],
        DeployStep::SetRemote => vec!["remote", "set-url", &cfg.remote, remote_url],
        DeployStep::Stage => vec!["add", &cfg.file],
        DeployStep::Commit => vec!["commit", "-m", &cfg.commit_message],
        // Pushes whatever HEAD points at onto the remote branch.
        DeployStep::Push => {
            let refspec = format!("HEAD:{}", cfg.branch);
            return git_args(&["push", &cfg.remote, &refspec, "--force"]);
        }
    };
    git_args(&args)
}

fn git_args(args: &[&str]) -> Vec<String> {
    std::iter::once("git")
        .chain(args.iter().copied())
        .map(str::to_string)
        .collect()
}
