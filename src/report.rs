//! Run report assembly and YAML persistence
//!
//! The report is the only durable artifact of a run: which teams and
//! projects were seen, which deleted deployments were found, and how each
//! restore attempt went. Maps are BTreeMaps so the YAML output is stable
//! and diffable between runs.

use chrono::{SecondsFormat, Utc};
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, VercelError};
use crate::restorer::{RestoreOutcome, RestoreStatus};
use crate::vercel::{Deployment, Project, Team};

/// Deployment row in the report, flattened from the wire shape plus the
/// outcome of its restore attempt
#[derive(Serialize, Debug, Clone)]
pub struct DeploymentEntry {
    pub id: String,
    pub branch: String,
    pub commit_sha: String,
    pub deleted_at: i64,
    pub deleted_by_retention: bool,
    pub restore: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_error: Option<String>,
}

impl DeploymentEntry {
    fn new(deployment: &Deployment, outcome: &RestoreOutcome) -> Self {
        let (restore, restore_error) = match &outcome.status {
            RestoreStatus::Restored => ("restored".to_string(), None),
            RestoreStatus::Failed(msg) => ("failed".to_string(), Some(msg.clone())),
            RestoreStatus::Skipped => ("skipped".to_string(), None),
        };

        Self {
            id: deployment.id.clone(),
            branch: deployment.branch().to_string(),
            commit_sha: deployment.commit_sha().to_string(),
            deleted_at: deployment.deleted_at,
            deleted_by_retention: deployment.deleted_by_retention,
            restore,
            restore_error,
        }
    }
}

/// Structured report of a full run
#[derive(Serialize, Debug)]
pub struct Report {
    pub generated_at: String,
    pub teams: Vec<Team>,
    pub projects_per_team: BTreeMap<String, Vec<Project>>,
    pub deleted_deployments: BTreeMap<String, BTreeMap<String, Vec<DeploymentEntry>>>,
}

impl Report {
    /// Create an empty report stamped with the current time
    pub fn new() -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            teams: Vec::new(),
            projects_per_team: BTreeMap::new(),
            deleted_deployments: BTreeMap::new(),
        }
    }

    /// Record the teams the traversal will cover
    pub fn record_teams(&mut self, teams: &[Team]) {
        self.teams = teams.to_vec();
    }

    /// Record the projects fetched for a team
    pub fn record_projects(&mut self, team_id: &str, projects: &[Project]) {
        self.projects_per_team
            .insert(team_id.to_string(), projects.to_vec());
    }

    /// Record a project's deleted deployments together with their restore outcomes
    ///
    /// `outcomes` comes from the restorer and is index-aligned with
    /// `deployments`.
    pub fn record_deployments(
        &mut self,
        team_id: &str,
        project_id: &str,
        deployments: &[Deployment],
        outcomes: &[RestoreOutcome],
    ) {
        let entries = deployments
            .iter()
            .zip(outcomes.iter())
            .map(|(d, o)| DeploymentEntry::new(d, o))
            .collect();

        self.deleted_deployments
            .entry(team_id.to_string())
            .or_default()
            .insert(project_id.to_string(), entries);
    }

    /// Total number of deleted deployments in the report
    pub fn deployment_count(&self) -> usize {
        self.deleted_deployments
            .values()
            .flat_map(|projects| projects.values())
            .map(|deployments| deployments.len())
            .sum()
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize the report to YAML and write it to `path`
///
/// The parent directory is created if absent.
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let yaml = serde_yml::to_string(report)
        .map_err(|e| VercelError::Io(format!("failed to serialize report: {}", e)))?;

    debug!("Writing report to {}", path.display());
    fs::write(path, yaml)?;
    Ok(())
}
