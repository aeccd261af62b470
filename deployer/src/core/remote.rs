//! GitHub remote URL construction.
//!
//! The push URL embeds the credential token as the userinfo component:
//! `https://<token>@<host>/<account>/<repo>.git`. The human-facing URL omits
//! both the token and the `.git` suffix.

/// Placeholder shown wherever a token would otherwise be printed or logged.
pub const REDACTED: &str = "***";

/// Build the authenticated push URL for `account/repo` on `host`.
pub fn authenticated_remote_url(token: &str, host: &str, account: &str, repo: &str) -> String {
    format!("https://{token}@{host}/{account}/{repo}.git")
}

/// Build the browsable repository URL printed after a successful push.
pub fn repository_url(host: &str, account: &str, repo: &str) -> String {
    format!("https://{host}/{account}/{repo}")
}
