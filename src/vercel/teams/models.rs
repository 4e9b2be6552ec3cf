//! Team data models

use serde::{Deserialize, Serialize};

use crate::vercel::traits::{CursorPage, VercelResource};
use crate::vercel::Pagination;

/// Team data from the Vercel API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Team {
    pub id: String,
    pub name: String,
}

/// Response envelope for the teams listing
#[derive(Deserialize, Debug)]
pub struct TeamsPage {
    pub teams: Vec<Team>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl CursorPage<Team> for TeamsPage {
    fn into_items(self) -> Vec<Team> {
        self.teams
    }

    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}

impl VercelResource for Team {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
