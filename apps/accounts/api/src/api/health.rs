//! Readiness check backed by the account store.

use crate::state::AppState;
use axum::{extract::State, response::Response};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

fn store_probe(state: &AppState) -> HealthCheckFuture<'_> {
    Box::pin(async move {
        state
            .accounts
            .account_count()
            .await
            .map(|count| tracing::trace!(count, "Account store reachable"))
            .map_err(|e| format!("Account store check failed: {}", e))
    })
}

pub async fn ready_handler(State(state): State<AppState>) -> Response {
    run_health_checks(vec![("store", store_probe(&state))]).await
}
