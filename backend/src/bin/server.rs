//! League dashboard HTTP server binary.
//!
//! Loads the configuration and the dataset, then serves the view model as a
//! JSON API. Any dataset schema problem aborts startup.
//!
//! # Usage
//!
//! ```bash
//! # Serve the embedded season snapshot
//! cargo run --bin league-server
//!
//! # Serve CSV files from a directory
//! DASHBOARD_DATA_DIR=./data cargo run --bin league-server
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_CONFIG`: Path to a `dashboard.toml` (default: searched)
//! - `DASHBOARD_DATA_DIR`: Directory with teams.csv, players.csv, monthly.csv
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Filter directives, e.g. `league_dashboard=debug,tower_http=info`
//!   (default: info)

use std::env;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use league_dashboard::config::DashboardConfig;
use league_dashboard::http::{bind_listener, create_router, AppState};
use league_dashboard::parsing::load_dataset;

/// Filter built from `RUST_LOG` directives, falling back to `info`.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; `log` records from the library are bridged in
    FmtSubscriber::builder()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok()))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting league dashboard server");

    let config = DashboardConfig::load().context("Failed to load configuration")?;
    let dataset = load_dataset(&config.data).context("Failed to load dataset")?;
    info!(
        "Dataset ready: {} teams, {} players, {} monthly records",
        dataset.teams.len(),
        dataset.players.len(),
        dataset.monthly.len()
    );

    let state = AppState::new(dataset, config.dashboard.clone());
    let app = create_router(state);

    let listener = bind_listener(&config.server)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address()))?;
    let addr = listener.local_addr()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_accepts_per_target_directives() {
        let filter = log_filter(Some("league_dashboard=debug,tower_http=info".to_string()));
        let rendered = filter.to_string();
        assert!(rendered.contains("league_dashboard=debug"));
        assert!(rendered.contains("tower_http=info"));
    }

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).to_string().to_lowercase(), "info");
        assert_eq!(
            log_filter(Some("league_dashboard=loudest".to_string()))
                .to_string()
                .to_lowercase(),
            "info"
        );
    }
}
