use std::io::Read;

use dotenvy::dotenv;
use tracing::info;

use goal_advisor::config;
use goal_advisor::logging;
use goal_advisor::wire::{self, GoalRequest};

/// Reads one goal request (JSON) from stdin and prints the verdict report.
/// The chat agent and dashboard collaborators consume this same wire shape.
fn main() -> eyre::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging
    if let Err(e) = logging::init_logging(env!("CARGO_BIN_NAME").to_string()) {
        eprintln!("Failed to initialize logging: {}", e);
        return Err(e);
    }

    // Load configuration (rate model defaults plus env overrides)
    let cfg = config::Config::load();
    info!(
        borrow_apr = cfg.rate_model.borrow_apr,
        max_leverage = cfg.rate_model.max_leverage,
        "Configuration loaded and logging initialized"
    );

    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    let request: GoalRequest = serde_json::from_str(&raw)?;

    let report = wire::evaluate_request(request, &cfg.rate_model)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
