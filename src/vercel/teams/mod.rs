//! Teams module - list the teams the token can access

mod api;
mod models;

pub use models::{Team, TeamsPage};
