//! Project data models

use serde::{Deserialize, Serialize};

use crate::vercel::traits::{CursorPage, VercelResource};
use crate::vercel::Pagination;

/// Project data from the Vercel API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Project {
    pub id: String,
    pub name: String,
}

/// Response envelope for the projects listing
#[derive(Deserialize, Debug)]
pub struct ProjectsPage {
    pub projects: Vec<Project>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl CursorPage<Project> for ProjectsPage {
    fn into_items(self) -> Vec<Project> {
        self.projects
    }

    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}

impl VercelResource for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
