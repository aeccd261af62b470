//! Deploy settings stored in `deployer.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default settings file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "deployer.toml";

/// Deploy settings (TOML).
///
/// Every field is optional in the file; missing fields fall back to the
/// values the tool has always deployed with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DeployConfig {
    /// GitHub account that owns the repository.
    pub account: String,
    pub repo: String,
    /// Git host used for both the push URL and the printed repository URL.
    pub host: String,
    /// Remote whose URL is rewritten before pushing.
    pub remote: String,
    /// Branch on the remote that receives the force-push.
    pub branch: String,
    /// File staged and committed on every deploy.
    pub file: String,
    pub commit_message: String,

    /// Env file scanned for the token, relative to the working directory.
    pub env_file: String,
    /// Key recognized in the env file (`<token_key>=<token>`).
    pub token_key: String,

    pub identity: IdentityConfig,
}

/// Committer identity written to the local git config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IdentityConfig {
    pub email: String,
    pub name: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            email: "tutatutaev9@gmail.com".to_string(),
            name: "swensi17".to_string(),
        }
    }
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            account: "swensi17".to_string(),
            repo: "neo".to_string(),
            host: "github.com".to_string(),
            remote: "origin".to_string(),
            branch: "main".to_string(),
            file: "README.md".to_string(),
            commit_message: "Update README".to_string(),
            env_file: ".env.local".to_string(),
            token_key: "GITHUB_TOKEN".to_string(),
            identity: IdentityConfig::default(),
        }
    }
}

impl DeployConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("account", &self.account),
            ("repo", &self.repo),
            ("host", &self.host),
            ("remote", &self.remote),
            ("branch", &self.branch),
        ] {
            if value.trim().is_empty() {
                return Err(anyhow!("{name} must not be empty"));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(anyhow!("{name} must not contain whitespace: '{value}'"));
            }
        }
        for (name, value) in [
            ("file", &self.file),
            ("commit_message", &self.commit_message),
            ("env_file", &self.env_file),
            ("identity.email", &self.identity.email),
            ("identity.name", &self.identity.name),
        ] {
            if value.trim().is_empty() {
                return Err(anyhow!("{name} must not be empty"));
            }
        }
        if self.token_key.trim().is_empty() || self.token_key.contains('=') {
            return Err(anyhow!(
                "token_key must be non-empty and must not contain '=': '{}'",
                self.token_key
            ));
        }
        Ok(())
    }

    /// Line prefix that marks the token inside the env file.
    pub fn token_prefix(&self) -> String {
        format!("{}=", self.token_key)
    }
}

/// Load settings from a TOML file.
///
/// If the file is missing, returns `DeployConfig::default()`.
pub fn load_config(path: &Path) -> Result<DeployConfig> {
    if !path.exists() {
        let cfg = DeployConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DeployConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid settings in {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write settings to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &DeployConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
