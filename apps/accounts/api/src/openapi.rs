use utoipa::OpenApi;
use utoipa::openapi::{self, InfoBuilder};

/// API documentation served at `/api-docs/openapi.json`.
///
/// The account routes are mounted at the root, so the domain document is
/// used as-is with application-level info on top.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> openapi::OpenApi {
        let mut doc = domain_accounts::handlers::ApiDoc::openapi();
        doc.info = InfoBuilder::new()
            .title("Accounts API")
            .version(env!("CARGO_PKG_VERSION"))
            .description(Some(
                "Create, remove, activate and deactivate user accounts",
            ))
            .build();
        doc
    }
}
