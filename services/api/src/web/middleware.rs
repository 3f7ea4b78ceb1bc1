//! services/api/src/web/middleware.rs
//!
//! Cross-cutting layers and fallbacks applied to every route.

use crate::config::Config;
use crate::error::ApiError;
use axum::http::{
    header::{
        ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, AUTHORIZATION, CONTENT_TYPE,
    },
    HeaderValue, Method, Uri,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

const ALLOWED_METHODS: &str = "GET,PUT,POST,DELETE,OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type,Authorization";
use tracing::warn;

/// Builds the CORS layer. Cross-origin calls are allowed for the methods and headers
/// the browser client uses; the origin is restricted only when configured.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let origin = match config.cors_allowed_origin.as_deref() {
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(value) => AllowOrigin::exact(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                AllowOrigin::from(Any)
            }
        },
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}

/// Stamps the allowed methods on every response, not only on preflight answers.
pub fn allow_methods_header() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    )
}

/// Stamps the allowed request headers on every response.
pub fn allow_headers_header() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    )
}

/// Answers requests for paths no route knows.
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}

/// Answers requests whose path exists under a different method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
