//! Project API operations

use crate::config::api;
use crate::error::Result;
use crate::vercel::VercelClient;

use super::models::{Project, ProjectsPage};

impl VercelClient {
    /// Get all projects belonging to a team (with pagination)
    pub async fn list_projects(&self, team_id: &str) -> Result<Vec<Project>> {
        let path = format!("{}?teamId={}", api::PROJECTS, urlencoding::encode(team_id));
        let error_context = format!("projects for team '{}'", team_id);

        self.fetch_all_pages::<Project, ProjectsPage>(&path, &error_context)
            .await
    }
}
