use crate::docs::ApiDoc;
use crate::handlers::{self, AppState};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Every route is a GET; bodies are never read.
const MAX_REQUEST_BODY_BYTES: usize = 16 * 1024;

/// Builds the full application router.
///
/// Kept separate from `main` so tests can drive it without binding a port.
pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/weather", get(handlers::weather))
        .route("/city-info", get(handlers::city_info))
        .route("/cities", get(handlers::cities))
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(MAX_REQUEST_BODY_BYTES)));

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .merge(api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
