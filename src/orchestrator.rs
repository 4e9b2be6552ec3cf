//! Three-level traversal: teams, their projects, their deleted deployments
//!
//! Walks every team the token can see, every project per team, and every
//! soft-deleted deployment per project, drains each project's backlog
//! through the rate-limited restorer, and assembles the run report.
//! Fetch failures follow the configured policy: `continue` logs and treats
//! the fetch as empty, `abort` propagates the first error.

use log::{error, info};
use std::time::Duration;

use crate::cli::OnError;
use crate::error::Result;
use crate::report::Report;
use crate::restorer::Restorer;
use crate::vercel::{VercelClient, VercelResource};

/// Options for a restore run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub cooldown: Duration,
    pub on_error: OnError,
    pub dry_run: bool,
    /// Restrict the run to the team with this id or name
    pub team: Option<String>,
    /// Restrict the run to the project with this id or name
    pub project: Option<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            cooldown: Duration::from_millis(crate::config::defaults::COOLDOWN_MS),
            on_error: OnError::Continue,
            dry_run: false,
            team: None,
            project: None,
        }
    }
}

/// Run the full traversal and return the assembled report
///
/// The report timestamp is set once, before any network activity.
pub async fn run(client: &VercelClient, options: &RunOptions) -> Result<Report> {
    let mut report = Report::new();
    let restorer = Restorer::new(client, options.cooldown, options.dry_run);

    let mut teams = absorb(client.list_teams().await, options.on_error, "teams")?;
    if let Some(filter) = &options.team {
        teams.retain(|t| t.matches(filter));
    }
    report.record_teams(&teams);
    info!("Found {} teams", teams.len());

    for team in &teams {
        let mut projects = absorb(
            client.list_projects(&team.id).await,
            options.on_error,
            &format!("projects for team '{}'", team.name),
        )?;
        if let Some(filter) = &options.project {
            projects.retain(|p| p.matches(filter));
        }
        report.record_projects(&team.id, &projects);
        info!(
            "Team '{}' ({}): {} projects",
            team.name,
            team.id,
            projects.len()
        );

        for project in &projects {
            let deployments = absorb(
                client.list_deleted_deployments(&team.id, &project.id).await,
                options.on_error,
                &format!("deleted deployments for project '{}'", project.name),
            )?;
            info!(
                " - Project '{}' ({}): {} deleted deployments",
                project.name,
                project.id,
                deployments.len()
            );

            let outcomes = restorer.restore_all(&team.id, &deployments).await;
            report.record_deployments(&team.id, &project.id, &deployments, &outcomes);

            info!(
                "   Finished restoring {} deleted deployments for project '{}'",
                deployments.len(),
                project.name
            );
        }
    }

    Ok(report)
}

/// Apply the fetch failure policy to a listing result
fn absorb<T>(result: Result<Vec<T>>, policy: OnError, context: &str) -> Result<Vec<T>> {
    match result {
        Ok(items) => Ok(items),
        Err(e) => match policy {
            OnError::Abort => Err(e),
            OnError::Continue => {
                error!("Error fetching {}: {}", context, e);
                Ok(Vec::new())
            }
        },
    }
}
