use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{delete, post, put},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::AccountResult;
use crate::models::{AccountResponse, CreateAccount};
use crate::repository::AccountStore;
use crate::service::AccountService;

const TAG: &str = "accounts";

/// OpenAPI documentation for the account endpoints
#[derive(OpenApi)]
#[openapi(
    paths(add_user, remove_user, activate_user, deactivate_user),
    components(schemas(CreateAccount, AccountResponse)),
    tags((name = TAG, description = "Account lifecycle endpoints"))
)]
pub struct ApiDoc;

/// Create the accounts router
pub fn router<S: AccountStore + 'static>(service: AccountService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/addUser", post(add_user))
        .route("/removeUser/{username}", delete(remove_user))
        .route("/activateUser/{username}", put(activate_user))
        .route("/deactivateUser/{username}", put(deactivate_user))
        .with_state(shared_service)
}

/// Register an account and issue its first token
#[utoipa::path(
    post,
    path = "/addUser",
    tag = TAG,
    request_body = CreateAccount,
    responses(
        (status = 200, description = "Account created", body = AccountResponse),
        (status = 400, description = "Malformed body, invalid username or invalid password", body = String, content_type = "text/plain")
    )
)]
async fn add_user<S: AccountStore>(
    State(service): State<Arc<AccountService<S>>>,
    payload: Result<Json<CreateAccount>, JsonRejection>,
) -> AccountResult<Json<AccountResponse>> {
    let Json(input) = payload?;
    let account = service.create_account(input).await?;
    Ok(Json(account))
}

/// Delete an account; succeeds whether or not it exists
#[utoipa::path(
    delete,
    path = "/removeUser/{username}",
    tag = TAG,
    params(("username" = String, Path, description = "Account username")),
    responses((status = 200, description = "Account removed"))
)]
async fn remove_user<S: AccountStore>(
    State(service): State<Arc<AccountService<S>>>,
    Path(username): Path<String>,
) -> AccountResult<StatusCode> {
    service.remove_account(&username).await?;
    Ok(StatusCode::OK)
}

/// Issue a fresh token for an existing account
#[utoipa::path(
    put,
    path = "/activateUser/{username}",
    tag = TAG,
    params(("username" = String, Path, description = "Account username")),
    responses(
        (status = 200, description = "Account activated", body = AccountResponse),
        (status = 404, description = "User not found", body = String, content_type = "text/plain")
    )
)]
async fn activate_user<S: AccountStore>(
    State(service): State<Arc<AccountService<S>>>,
    Path(username): Path<String>,
) -> AccountResult<Json<AccountResponse>> {
    let account = service.activate_account(&username).await?;
    Ok(Json(account))
}

/// Clear an account's token
#[utoipa::path(
    put,
    path = "/deactivateUser/{username}",
    tag = TAG,
    params(("username" = String, Path, description = "Account username")),
    responses(
        (status = 200, description = "Account deactivated"),
        (status = 404, description = "User not found", body = String, content_type = "text/plain")
    )
)]
async fn deactivate_user<S: AccountStore>(
    State(service): State<Arc<AccountService<S>>>,
    Path(username): Path<String>,
) -> AccountResult<StatusCode> {
    service.deactivate_account(&username).await?;
    Ok(StatusCode::OK)
}
