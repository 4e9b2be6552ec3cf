//! Team API operations

use crate::config::api;
use crate::error::Result;
use crate::vercel::VercelClient;

use super::models::{Team, TeamsPage};

impl VercelClient {
    /// Get all teams the token can access (with pagination)
    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        self.fetch_all_pages::<Team, TeamsPage>(api::TEAMS, "teams")
            .await
    }
}
