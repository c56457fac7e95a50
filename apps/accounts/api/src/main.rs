use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Full application router: accounts endpoints, docs, /health and /ready.
fn build_app(state: &AppState) -> axum::Router {
    create_router::<openapi::ApiDoc>(api::routes(state))
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(
        hasher = %config.accounts.hasher,
        token_issuer = %config.accounts.token_issuer,
        "Account service strategies selected"
    );

    let state = AppState::new(config);
    let app = build_app(&state);

    info!(
        "Starting accounts API (shutdown timeout {:?})",
        state.config.server.shutdown_timeout
    );

    let accounts = state.accounts.clone();
    create_production_app(app, &state.config.server, async move {
        // In-memory state is dropped with the process
        match accounts.account_count().await {
            Ok(count) => info!(count, "Discarding in-memory accounts"),
            Err(e) => tracing::error!("Failed to read account store during shutdown: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Accounts API shutdown complete");
    Ok(())
}
