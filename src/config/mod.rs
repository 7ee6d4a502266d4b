//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.reviewfold.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `REVIEWFOLD_PR_URL`, `REVIEWFOLD_TOKEN`,
//!    `REVIEWFOLD_MINIMIZE`, or legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--pr-url`/`-u`, `--token`/`-t` and
//!    `--minimize`/`-m`
//!
//! # Configuration File
//!
//! ```toml
//! pr_url = "https://github.com/owner/repo/pull/123"
//! token = "ghp_example"
//! # Usually passed per run with `--minimize`.
//! minimize = "PRR_kwDOExample"
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::ReviewError;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use reviewfold::ReviewfoldConfig;
///
/// let config = ReviewfoldConfig::load().expect("failed to load configuration");
/// let pr_url = config.require_pr_url().expect("PR URL required");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REVIEWFOLD",
    discovery(
        dotfile_name = ".reviewfold.toml",
        config_file_name = "reviewfold.toml",
        app_name = "reviewfold"
    )
)]
pub struct ReviewfoldConfig {
    /// GitHub pull request URL to inspect.
    ///
    /// Required for listing. When minimizing it only selects the API host and
    /// may be omitted for github.com.
    ///
    /// Can be provided via:
    /// - CLI: `--pr-url <URL>` or `-u <URL>`
    /// - Environment: `REVIEWFOLD_PR_URL`
    /// - Config file: `pr_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub pr_url: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `REVIEWFOLD_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Node ID of a review or comment to minimize.
    ///
    /// Can be provided via:
    /// - CLI: `--minimize <NODE_ID>` or `-m <NODE_ID>`
    /// - Environment: `REVIEWFOLD_MINIMIZE`
    /// - Config file: `minimize = "..."`
    ///
    /// Node IDs differ per review, so this is normally set per invocation.
    #[ortho_config(cli_short = 'm')]
    pub minimize: Option<String>,
}

impl ReviewfoldConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, ReviewError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(ReviewError::MissingToken)
    }

    /// Returns the pull request URL or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::MissingPullRequestUrl`] when no URL is configured.
    pub fn require_pr_url(&self) -> Result<&str, ReviewError> {
        self.pr_url
            .as_deref()
            .ok_or(ReviewError::MissingPullRequestUrl)
    }
}

#[cfg(test)]
mod tests;
