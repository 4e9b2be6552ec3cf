//! vercel-restore - bring soft-deleted Vercel deployments back
//!
//! A CLI tool that walks every team and project the API token can see,
//! finds deployments in the soft-deleted state, restores them one by one
//! with rate-limit pacing, and writes a YAML report of everything it
//! touched.
//!
//! # Example
//!
//! ```bash
//! # Restore everything the token can reach
//! VERCEL_API_TOKEN=... vercel-restore
//!
//! # See what would be restored without touching anything
//! vercel-restore --dry-run
//!
//! # One team only, stop at the first fetch error
//! vercel-restore --team my-team --on-error abort
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod report;
pub mod restorer;
pub mod vercel;

pub use cli::{Cli, OnError};
pub use error::{Result, VercelError};
pub use orchestrator::{run, RunOptions};
pub use report::{write_report, DeploymentEntry, Report};
pub use restorer::{RestoreOutcome, RestoreStatus, Restorer};
pub use vercel::{Deployment, Pagination, Project, Team, VercelClient, VercelResource};
