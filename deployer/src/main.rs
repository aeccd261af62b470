//! README deployer.
//!
//! Points `origin` at a token-authenticated GitHub URL, commits `README.md`
//! and force-pushes it. Settings come from an optional `deployer.toml`; the
//! token comes from `.env.local` or an interactive prompt.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use deployer::deploy::run_deploy;
use deployer::exit_codes;
use deployer::io::config::{DEFAULT_CONFIG_FILE, DeployConfig, load_config, write_config};
use deployer::io::credentials::{StdinPrompt, resolve_token};
use deployer::io::process::ShellRunner;
use deployer::logging;
use deployer::plan::plan_commands;
use tracing::debug;

/// Stand-in token for `plan`; always masked in the printed commands.
const PLAN_TOKEN: &str = "deployer-plan-token";

#[derive(Parser)]
#[command(
    name = "deployer",
    version,
    about = "Commit README.md and force-push it to GitHub"
)]
struct Cli {
    /// Local working copy to deploy from (default: current directory).
    #[arg(long, global = true)]
    workdir: Option<PathBuf>,

    /// Settings file (default: `<workdir>/deployer.toml`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Configure identity and remote, commit the file, force-push (default).
    Deploy,
    /// Print the git commands `deploy` would run, token masked.
    Plan,
    /// Write a `deployer.toml` with default settings.
    Init {
        /// Overwrite an existing settings file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let workdir = match cli.workdir {
        Some(dir) => dir,
        None => std::env::current_dir().context("resolve current directory")?,
    };
    if !workdir.is_dir() {
        bail!("workdir {} is not a directory", workdir.display());
    }
    let config_path = cli
        .config
        .unwrap_or_else(|| workdir.join(DEFAULT_CONFIG_FILE));
    debug!(workdir = %workdir.display(), config = %config_path.display(), "resolved paths");

    match cli.command.unwrap_or(Command::Deploy) {
        Command::Deploy => cmd_deploy(&workdir, &config_path),
        Command::Plan => cmd_plan(&workdir, &config_path),
        Command::Init { force } => cmd_init(&config_path, force),
    }
}

fn cmd_deploy(workdir: &Path, config_path: &Path) -> Result<()> {
    let cfg = load_config(config_path)?;
    let env_path = workdir.join(&cfg.env_file);
    let token = resolve_token(&env_path, &cfg.token_prefix(), &StdinPrompt)?;
    let runner = ShellRunner::new(workdir);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_deploy(&cfg, &token, &runner, &mut out)?;
    out.flush().context("flush stdout")?;
    Ok(())
}

fn cmd_plan(workdir: &Path, config_path: &Path) -> Result<()> {
    let cfg = load_config(config_path)?;
    println!(
        "token: {} ({}) or prompt",
        workdir.join(&cfg.env_file).display(),
        cfg.token_prefix()
    );
    for planned in plan_commands(&cfg, PLAN_TOKEN) {
        println!("{}", planned.redacted);
    }
    Ok(())
}

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    if !force && config_path.exists() {
        println!(
            "init: {} already exists (use --force to overwrite)",
            config_path.display()
        );
        return Ok(());
    }
    write_config(config_path, &DeployConfig::default())?;
    println!("init: wrote {}", config_path.display());
    Ok(())
}
