//! Route definitions for the API.

use axum::{
    Router,
    http::HeaderValue,
    routing::get,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::SharedState;
use super::handlers;
use crate::errors::{AppError, AppResult};

/// Create the API router.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route(
            "/api/logs",
            get(handlers::list_logs).post(handlers::create_log),
        )
        .route("/api/stats/weekly", get(handlers::weekly_stats))
        .route("/api/stats/categories", get(handlers::category_stats))
        .with_state(state)
}

/// CORS for the browser client: listed origins, with credentials.
///
/// Credentials rule out wildcards: a `*` origin is a configuration error,
/// and any method and header is allowed by mirroring what the preflight
/// request asks for.
pub fn cors_layer(origins: &[String]) -> AppResult<CorsLayer> {
    let origins = origins
        .iter()
        .map(|o| {
            let o = o.trim();
            if o == "*" {
                return Err(AppError::Config(
                    "wildcard CORS origin '*' cannot be used with credentials; list origins explicitly"
                        .to_string(),
                ));
            }
            o.parse::<HeaderValue>()
                .map_err(|_| AppError::Config(format!("invalid CORS origin: '{o}'")))
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Full application: routes plus CORS and request tracing.
pub fn app(state: SharedState, origins: &[String]) -> AppResult<Router> {
    Ok(create_router(state)
        .layer(cors_layer(origins)?)
        .layer(TraceLayer::new_for_http()))
}
