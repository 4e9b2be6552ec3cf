//! Vercel deployment restorer - main entry point

use clap::Parser;
use log::{debug, info};
use std::time::Duration;

use vercel_restore::config::credentials;
use vercel_restore::{orchestrator, report, Cli, RunOptions, VercelClient, VercelError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Pick up a .env file if one exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!(
        "Starting Vercel deployment restorer v{}",
        env!("CARGO_PKG_VERSION")
    );
    debug!(
        "CLI args: api_url={}, cooldown_ms={}, on_error={}, team={:?}, project={:?}, dry_run={}",
        cli.api_url, cli.cooldown_ms, cli.on_error, cli.team, cli.project, cli.dry_run
    );

    // The token is the one hard requirement; fail before any network call
    let token = cli.token.clone().ok_or_else(|| {
        VercelError::Config(format!(
            "no API token found; set {} in the environment (or a .env file), or pass --token",
            credentials::TOKEN_ENV_VAR
        ))
    })?;

    let client = VercelClient::new(token, cli.api_url.clone());

    let options = RunOptions {
        cooldown: Duration::from_millis(cli.cooldown_ms),
        on_error: cli.on_error,
        dry_run: cli.dry_run,
        team: cli.team.clone(),
        project: cli.project.clone(),
    };

    let report = orchestrator::run(&client, &options).await?;

    info!(
        "Finished: {} teams, {} deleted deployments",
        report.teams.len(),
        report.deployment_count()
    );
    info!("Writing report to {}", cli.output.display());
    report::write_report(&report, &cli.output)?;

    info!("Done");
    Ok(())
}
