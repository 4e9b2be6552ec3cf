//! Vercel API client module
//!
//! This module provides functionality to interact with the Vercel REST API.

mod client;
pub mod deployments;
pub mod projects;
pub mod teams;
pub mod traits;

use serde::Deserialize;

pub use client::VercelClient;
pub use deployments::{Deployment, DeploymentMeta};
pub use projects::Project;
pub use teams::Team;
pub use traits::{CursorPage, VercelResource};

/// Cursor pagination block from the Vercel API (shared across resources)
///
/// `next` and `prev` are timestamp cursors; `next == 0` or an absent block
/// means there are no further pages.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct Pagination {
    pub count: Option<u64>,
    pub next: Option<i64>,
    pub prev: Option<i64>,
}
