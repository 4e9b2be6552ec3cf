//! CLI argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{credentials, defaults};

/// Vercel deployment restorer CLI
#[derive(Parser, Debug)]
#[command(name = "vercel-restore")]
#[command(version)]
#[command(about = "Restore soft-deleted Vercel deployments", long_about = None)]
pub struct Cli {
    /// API token (falls back to the VERCEL_API_TOKEN environment variable)
    #[arg(short = 't', long, env = credentials::TOKEN_ENV_VAR, hide_env_values = true)]
    pub token: Option<String>,

    /// Vercel API root URL
    #[arg(long, env = "VERCEL_API_URL", default_value = defaults::API_URL)]
    pub api_url: String,

    /// Cooldown between restore calls, in milliseconds
    #[arg(long, env = "RESTORE_COOLDOWN_MS", default_value_t = defaults::COOLDOWN_MS)]
    pub cooldown_ms: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, env = "LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// What to do when a fetch fails
    #[arg(long, value_enum, default_value_t = OnError::Continue)]
    pub on_error: OnError,

    /// Only process the team with this id or name
    #[arg(long)]
    pub team: Option<String>,

    /// Only process the project with this id or name
    #[arg(long)]
    pub project: Option<String>,

    /// Report output path
    #[arg(short = 'o', long, default_value = defaults::OUTPUT_PATH)]
    pub output: PathBuf,

    /// List deleted deployments without restoring anything
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

/// Fetch failure policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnError {
    /// Log the error, treat the fetch as empty, keep going (default)
    Continue,
    /// Stop at the first fetch error
    Abort,
}

impl std::fmt::Display for OnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OnError::Continue => write!(f, "continue"),
            OnError::Abort => write!(f, "abort"),
        }
    }
}
