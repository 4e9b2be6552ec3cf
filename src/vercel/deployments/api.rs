//! Deployment API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, VercelError};
use crate::vercel::VercelClient;

use super::models::{Deployment, DeploymentsPage};

impl VercelClient {
    /// Get all soft-deleted deployments of a project (with pagination)
    ///
    /// The `state=DELETED` filter is applied server-side and trusted; items
    /// are not re-checked locally.
    pub async fn list_deleted_deployments(
        &self,
        team_id: &str,
        project_id: &str,
    ) -> Result<Vec<Deployment>> {
        let path = format!(
            "{}?limit={}&projectId={}&teamId={}&state={}",
            api::DEPLOYMENTS,
            api::DEPLOYMENTS_PAGE_SIZE,
            urlencoding::encode(project_id),
            urlencoding::encode(team_id),
            api::DELETED_STATE
        );
        let error_context = format!(
            "deleted deployments for project '{}' in team '{}'",
            project_id, team_id
        );

        self.fetch_all_pages::<Deployment, DeploymentsPage>(&path, &error_context)
            .await
    }

    /// Restore a soft-deleted deployment
    ///
    /// Issues the undelete call; the deployment becomes active server-side.
    /// A non-2xx status is reported as an error so the caller can record the
    /// failed restore.
    pub async fn restore_deployment(&self, team_id: &str, deployment_id: &str) -> Result<()> {
        let url = format!(
            "{}{}/{}?teamId={}",
            self.base_url(),
            api::UNDELETE_DEPLOYMENT,
            deployment_id,
            urlencoding::encode(team_id)
        );

        debug!(
            "Restoring deployment '{}' in team '{}'",
            deployment_id, team_id
        );

        let response = self
            .patch(&url)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        debug!(
            "Restore of deployment '{}' returned status {}",
            deployment_id, status
        );

        if !status.is_success() {
            return Err(VercelError::Api {
                status: status.as_u16(),
                message: format!("Failed to restore deployment '{}'", deployment_id),
            });
        }

        Ok(())
    }
}
