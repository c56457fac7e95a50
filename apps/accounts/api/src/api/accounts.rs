use axum::Router;
use domain_accounts::handlers;

pub fn router(state: &crate::state::AppState) -> Router {
    handlers::router(state.accounts.clone())
}
