//! Rate-limited restore loop
//!
//! Drives the undelete calls for one project's backlog of deleted
//! deployments, pacing them with a fixed cooldown so the API's request-rate
//! ceiling is respected. Purely sequential; a failing restore is recorded
//! and the loop moves on.

use log::{debug, warn};
use std::time::Duration;

use crate::vercel::{Deployment, VercelClient};

/// Status of a single restore attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreStatus {
    /// The undelete call succeeded
    Restored,
    /// The undelete call failed; message describes why
    Failed(String),
    /// Skipped because of --dry-run
    Skipped,
}

/// Bookkeeping record for one restore attempt
#[derive(Debug, Clone)]
pub struct RestoreOutcome {
    pub deployment_id: String,
    pub status: RestoreStatus,
}

/// Sequential restorer with fixed inter-call pacing
pub struct Restorer<'a> {
    client: &'a VercelClient,
    cooldown: Duration,
    dry_run: bool,
}

impl<'a> Restorer<'a> {
    pub fn new(client: &'a VercelClient, cooldown: Duration, dry_run: bool) -> Self {
        Self {
            client,
            cooldown,
            dry_run,
        }
    }

    /// Restore every deployment in the slice, in order
    ///
    /// One undelete call per deployment, with a cooldown sleep after each
    /// call (the last one included). Failures don't stop the loop; each
    /// attempt produces an outcome in input order.
    pub async fn restore_all(
        &self,
        team_id: &str,
        deployments: &[Deployment],
    ) -> Vec<RestoreOutcome> {
        let mut outcomes = Vec::with_capacity(deployments.len());

        for deployment in deployments {
            if self.dry_run {
                debug!("Dry run: skipping restore of deployment '{}'", deployment.id);
                outcomes.push(RestoreOutcome {
                    deployment_id: deployment.id.clone(),
                    status: RestoreStatus::Skipped,
                });
                continue;
            }

            let status = match self.client.restore_deployment(team_id, &deployment.id).await {
                Ok(()) => RestoreStatus::Restored,
                Err(e) => {
                    warn!("Failed to restore deployment '{}': {}", deployment.id, e);
                    RestoreStatus::Failed(e.to_string())
                }
            };
            outcomes.push(RestoreOutcome {
                deployment_id: deployment.id.clone(),
                status,
            });

            debug!("Sleeping {:?} to avoid rate limits", self.cooldown);
            tokio::time::sleep(self.cooldown).await;
        }

        outcomes
    }
}
