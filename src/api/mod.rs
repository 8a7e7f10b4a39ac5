//! REST API layer: route handlers, DTOs, OpenAPI document and router
//! composition.
//!
//! All endpoints are mounted at the root.

pub mod docs;
pub mod dto;
pub mod handlers;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
///
/// With the `swagger-ui` feature, Swagger UI is served at `/docs` and the
/// OpenAPI document at `/openapi.json`. Unmatched paths get a JSON 404.
pub fn build_router() -> Router<AppState> {
    let router = Router::new().merge(handlers::routes());

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/docs")
                .url("/openapi.json", docs::ApiDoc::openapi()),
        )
    };

    router.fallback(handlers::system::not_found)
}
