use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Malformed request body: {0}")]
    MalformedInput(String),

    #[error("Invalid username format")]
    InvalidUsername,

    #[error("Invalid password format")]
    InvalidPassword,

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AccountResult<T> = Result<T, AccountError>;

impl From<JsonRejection> for AccountError {
    fn from(rejection: JsonRejection) -> Self {
        AccountError::MalformedInput(rejection.body_text())
    }
}

impl AccountError {
    pub fn status(&self) -> StatusCode {
        match self {
            AccountError::MalformedInput(_)
            | AccountError::InvalidUsername
            | AccountError::InvalidPassword => StatusCode::BAD_REQUEST,
            AccountError::NotFound(_) => StatusCode::NOT_FOUND,
            AccountError::PasswordHash(_) | AccountError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Errors are rendered as a status code with a plaintext body.
impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AccountError::MalformedInput(details) => {
                tracing::info!(%details, "Rejected malformed request body");
                details.clone()
            }
            AccountError::InvalidUsername | AccountError::InvalidPassword => self.to_string(),
            AccountError::NotFound(username) => {
                tracing::debug!(%username, "Account lookup missed");
                "User not found".to_string()
            }
            AccountError::PasswordHash(msg) => {
                tracing::error!("Password hash error: {}", msg);
                "An internal error occurred".to_string()
            }
            AccountError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AccountError::MalformedInput("eof".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AccountError::InvalidUsername.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AccountError::InvalidPassword.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AccountError::NotFound("ghost".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AccountError::PasswordHash("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_validation_errors_render_plaintext() {
        let response = AccountError::InvalidUsername.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(
            response.headers()[axum::http::header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
        assert_eq!(body_text(response).await, "Invalid username format");
    }

    #[tokio::test]
    async fn test_not_found_hides_username() {
        let response = AccountError::NotFound("ghost".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "User not found");
    }

    #[tokio::test]
    async fn test_internal_errors_are_not_leaked() {
        let response = AccountError::PasswordHash("salt failure".into()).into_response();
        assert_eq!(body_text(response).await, "An internal error occurred");
    }
}
