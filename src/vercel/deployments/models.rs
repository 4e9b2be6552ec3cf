//! Deployment data models

use serde::Deserialize;

use crate::vercel::traits::CursorPage;
use crate::vercel::Pagination;

/// Soft-deleted deployment data from the Vercel API
///
/// The listing endpoint reports the deployment id as `uid` and the deletion
/// timestamp as `deleted`. Git metadata lives in an optional `meta` block
/// and is absent for deployments not linked to a repository.
#[derive(Deserialize, Debug, Clone)]
pub struct Deployment {
    #[serde(rename = "uid")]
    pub id: String,
    #[serde(rename = "deleted")]
    pub deleted_at: i64,
    #[serde(rename = "softDeletedByRetention", default)]
    pub deleted_by_retention: bool,
    #[serde(default)]
    pub meta: Option<DeploymentMeta>,
}

/// Git metadata attached to a deployment
#[derive(Deserialize, Debug, Clone, Default)]
pub struct DeploymentMeta {
    #[serde(rename = "githubCommitRef")]
    pub github_commit_ref: Option<String>,
    #[serde(rename = "githubCommitSha")]
    pub github_commit_sha: Option<String>,
}

impl Deployment {
    /// Get the source branch, defaulting to empty string if not available
    pub fn branch(&self) -> &str {
        self.meta
            .as_ref()
            .and_then(|m| m.github_commit_ref.as_deref())
            .unwrap_or("")
    }

    /// Get the commit SHA, defaulting to empty string if not available
    pub fn commit_sha(&self) -> &str {
        self.meta
            .as_ref()
            .and_then(|m| m.github_commit_sha.as_deref())
            .unwrap_or("")
    }
}

/// Response envelope for the deployments listing
#[derive(Deserialize, Debug)]
pub struct DeploymentsPage {
    pub deployments: Vec<Deployment>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl CursorPage<Deployment> for DeploymentsPage {
    fn into_items(self) -> Vec<Deployment> {
        self.deployments
    }

    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}
