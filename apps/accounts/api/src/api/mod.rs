use axum::Router;

pub mod accounts;
pub mod health;

/// Domain routes, state applied. Served at the root by `create_router`.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().merge(accounts::router(state))
}

/// Router with the /ready endpoint, which probes the account store.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
