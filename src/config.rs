/// Configuration constants for the Vercel API
pub mod api {
    /// Teams listing endpoint
    pub const TEAMS: &str = "/v2/teams";

    /// Projects listing endpoint
    pub const PROJECTS: &str = "/v10/projects";

    /// Deployments listing endpoint
    pub const DEPLOYMENTS: &str = "/v6/deployments";

    /// Deployment undelete endpoint (deployment id is appended)
    pub const UNDELETE_DEPLOYMENT: &str = "/v1/projects/undelete-deployment";

    /// Page size for deployment listing requests
    pub const DEPLOYMENTS_PAGE_SIZE: u32 = 100;

    /// Server-side state filter for soft-deleted deployments
    pub const DELETED_STATE: &str = "DELETED";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding the API token
    pub const TOKEN_ENV_VAR: &str = "VERCEL_API_TOKEN";
}

/// Default values for CLI
pub mod defaults {
    /// Default Vercel API root
    pub const API_URL: &str = "https://vercel.com/api";

    /// Default log level
    pub const LOG_LEVEL: &str = "info";

    /// Default cooldown between restore calls, in milliseconds
    pub const COOLDOWN_MS: u64 = 250;

    /// Default report path (directory is created if absent)
    pub const OUTPUT_PATH: &str = ".out/deployment_overview.yaml";
}
