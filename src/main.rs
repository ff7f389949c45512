mod config;
mod core;
mod models;
mod pipeline;
mod services;

use crate::config::Settings;
use tracing::{error, info};

fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting cohort-match...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!(
        "Configuration loaded (capacity: {} mentees per mentor)",
        settings.matching.max_mentees_per_mentor
    );

    match pipeline::run(&settings) {
        Ok(summary) => {
            info!(
                "Run complete: {} of {} students matched, {} unmatched ({} mentors)",
                summary.matched, summary.total_students, summary.unmatched, summary.total_mentors
            );
        }
        Err(e) => {
            error!("Run failed: {}", e);
            std::process::exit(1);
        }
    }
}
