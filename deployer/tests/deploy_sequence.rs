//! Sequence tests for the deploy orchestration.
//!
//! Drive `resolve_token` + `run_deploy` with scripted runners so no `git`
//! binary or network access is needed.

use std::fs;

use deployer::core::shell::ShellFlavor;
use deployer::core::types::DeployStep;
use deployer::deploy::run_deploy;
use deployer::io::config::DeployConfig;
use deployer::io::credentials::resolve_token;
use deployer::test_support::{BrokenRunner, ScriptedPrompt, ScriptedRunner};

fn expected() -> Vec<String> {
    vec![
        "git config user.email tutatutaev9@gmail.com".to_string(),
        "git config user.name swensi17".to_string(),
        "git remote set-url origin https://abc123@github.com/swensi17/neo.git".to_string(),
        "git add README.md".to_string(),
        format!(
            "git commit -m {}",
            ShellFlavor::native().quote("Update README")
        ),
        "git push origin HEAD:main --force".to_string(),
    ]
}

fn deploy_with(runner: &ScriptedRunner) -> (deployer::core::types::DeployOutcome, String) {
    let mut buf = Vec::new();
    let outcome =
        run_deploy(&DeployConfig::default(), "abc123", runner, &mut buf).expect("deploy");
    (outcome, String::from_utf8(buf).expect("utf8"))
}

#[test]
fn token_from_env_file_reaches_remote_command() {
    let temp = tempfile::tempdir().expect("tempdir");
    let cfg = DeployConfig::default();
    fs::write(temp.path().join(&cfg.env_file), "GITHUB_TOKEN=abc123\n").expect("write env");
    let prompt = ScriptedPrompt::new("never");

    let token = resolve_token(
        &temp.path().join(&cfg.env_file),
        &cfg.token_prefix(),
        &prompt,
    )
    .expect("token");
    assert_eq!(prompt.times_asked(), 0);

    let runner = ScriptedRunner::always(true);
    let mut buf = Vec::new();
    run_deploy(&cfg, &token, &runner, &mut buf).expect("deploy");
    assert_eq!(runner.commands(), expected());
}

#[test]
fn prompted_token_is_trimmed() {
    let temp = tempfile::tempdir().expect("tempdir");
    let cfg = DeployConfig::default();
    let prompt = ScriptedPrompt::new(" abc123\r\n");

    let token = resolve_token(
        &temp.path().join(&cfg.env_file),
        &cfg.token_prefix(),
        &prompt,
    )
    .expect("token");
    assert_eq!(token, "abc123");
    assert_eq!(prompt.times_asked(), 1);
}

#[test]
fn all_six_commands_run_even_when_every_step_fails() {
    let runner = ScriptedRunner::always(false);
    let (outcome, text) = deploy_with(&runner);

    assert_eq!(runner.commands(), expected());
    assert_eq!(outcome.failed_steps(), DeployStep::ALL.to_vec());
    assert!(!outcome.pushed());
    assert!(!text.contains("✅"));
    assert_eq!(text.matches(">>> ").count(), 6);
    assert!(text.contains("scripted failure: git add README.md"));
}

#[test]
fn commit_failure_does_not_block_push() {
    // nothing-to-commit is a failed commit, the push still runs and succeeds
    let runner = ScriptedRunner::new(vec![true, true, true, true, false, true]);
    let (outcome, text) = deploy_with(&runner);

    assert_eq!(runner.commands().len(), 6);
    assert_eq!(outcome.failed_steps(), vec![DeployStep::Commit]);
    assert!(outcome.pushed());
    assert!(text.contains("📄 https://github.com/swensi17/neo"));
}

#[test]
fn broken_runner_completes_without_banner() {
    let mut buf = Vec::new();
    let outcome = run_deploy(&DeployConfig::default(), "abc123", &BrokenRunner, &mut buf)
        .expect("deploy");
    let text = String::from_utf8(buf).expect("utf8");

    assert_eq!(outcome.steps.len(), 6);
    assert!(!outcome.pushed());
    assert!(!text.contains("✅"));
    assert!(text.contains("spawn shell"));
}

#[test]
fn echo_order_matches_execution_order() {
    let runner = ScriptedRunner::always(true);
    let (_, text) = deploy_with(&runner);

    let echoed: Vec<&str> = text
        .lines()
        .filter_map(|line| line.strip_prefix(">>> "))
        .collect();
    let mut masked = expected();
    masked[2] = "git remote set-url origin https://***@github.com/swensi17/neo.git".to_string();
    assert_eq!(echoed, masked);
}

#[test]
fn token_needing_quotes_never_reaches_transcript() {
    let runner = ScriptedRunner::always(true);
    let mut buf = Vec::new();
    run_deploy(&DeployConfig::default(), "gh'p_x1", &runner, &mut buf).expect("deploy");
    let text = String::from_utf8(buf).expect("utf8");

    assert!(!text.contains("gh"));
    assert!(!text.contains("p_x1"));
    assert!(text.contains("https://***@github.com/swensi17/neo.git"));
}
