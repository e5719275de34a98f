///
/// main.rs  Oct 16th, 2026
///
/// football-stats [config.yaml] [profile]
///
/// Smoke check against a running statistics service: loads the profile,
/// installs logging, pulls the competition list and top scorers.
///

use std::process::ExitCode;

use football_stats_client::{
    core::logging::init_logging, init::load_config_from_yaml, CallContext, StatsClient,
};
use tracing::{error, info};

const DEFAULT_CONFIG: &str = "config.yaml";
const DEFAULT_PROFILE: &str = "local";

#[tokio::main]
async fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let profile = args.next().unwrap_or_else(|| DEFAULT_PROFILE.to_string());

    let config = match load_config_from_yaml(&path, &profile) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load {path} [{profile}]: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config.log) {
        eprintln!("failed to initialise logging: {e}");
        return ExitCode::FAILURE;
    }

    let client = match StatsClient::new(&config.api) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "could not build client");
            return ExitCode::FAILURE;
        }
    };

    let ctx = CallContext::new();
    let (competitions, scorers) = tokio::join!(
        client.list_competitions(&ctx),
        client.top_scorers(&ctx),
    );

    let mut failed = false;
    match competitions {
        Ok(list) => info!(count = list.len(), base = %config.api.base_url, "competitions"),
        Err(e) => { error!(error = %e, "competitions"); failed = true; }
    }
    match scorers {
        Ok(players) => {
            for p in &players {
                info!(id = %p.id, name = %p.name, goals = p.goals.unwrap_or_default(), "top scorer");
            }
        }
        Err(e) => { error!(error = %e, "top scorers"); failed = true; }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
