//! Projects module - list projects within a team

mod api;
mod models;

pub use models::{Project, ProjectsPage};
