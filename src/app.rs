use axum::{routing::{get, put}, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::routes;

/// Builds the full application router.
///
/// Unknown paths and unsupported methods are answered by axum's defaults
/// (404 and 405).
pub fn router() -> Router {
    Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(
            routes::START_VIRTUAL_MACHINE,
            put(handlers::start_virtual_machine).get(handlers::start_virtual_machine_get),
        )
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        // High level logging of requests and responses
        .layer(TraceLayer::new_for_http())
}
