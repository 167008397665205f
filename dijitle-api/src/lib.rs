pub mod config;
pub mod dtos;
pub mod handlers;
pub mod startup;

use axum::{middleware::from_fn, routing::get, Json, Router};
use service_core::middleware::{
    security_headers::security_headers_middleware,
    tracing::{request_id_middleware, REQUEST_ID_HEADER},
};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::DijitleConfig;

/// Human-readable name used in the welcome message and API docs.
pub const SERVICE_NAME: &str = "Dijitle API";
/// Machine identifier reported by the status endpoint and in logs.
pub const SERVICE_ID: &str = "dijitle-api";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(OpenApi)]
#[openapi(
    info(title = "Dijitle API"),
    paths(
        handlers::root::root,
        handlers::health::health_check,
        handlers::status::service_status,
    ),
    components(schemas(
        dtos::WelcomeResponse,
        dtos::HealthResponse,
        dtos::StatusResponse,
    )),
    tags(
        (name = "Service", description = "Service identity and status"),
        (name = "Observability", description = "Service health"),
    )
)]
pub struct ApiDoc;

pub fn build_router(config: &DijitleConfig) -> Router {
    let mut app = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/api/v1/status", get(handlers::service_status));

    if config.swagger_enabled {
        app = app.merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()));
    } else {
        // Keep the document reachable for programmatic clients.
        app = app.route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }));
    }

    app.layer(from_fn(security_headers_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");

                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
        )
        // Outermost, so the trace span sees the id
        .layer(from_fn(request_id_middleware))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_describes_every_route() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, SERVICE_NAME);
        assert_eq!(doc.info.version, SERVICE_VERSION);

        for path in ["/", "/health", "/api/v1/status"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn version_is_pinned() {
        assert_eq!(SERVICE_VERSION, "1.0.0");
    }
}
