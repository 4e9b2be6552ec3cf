//! Deployments module - list soft-deleted deployments and undelete them

mod api;
mod models;

pub use models::{Deployment, DeploymentMeta, DeploymentsPage};
