//! CORS policy for browser clients.
//!
//! Applied at the Router level, never inside handlers.
//!
//! Policy:
//! - Development: permissive (Allow-Origin: *), WITHOUT credentials.
//! - Production: allowlist origins from Config (comma-separated env var),
//!   WITHOUT credentials.

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;

/// Exact-match allowlist. An empty allowlist allows no origin at all
/// rather than falling back to wildcard.
fn exact_origin_allowlist(origins: &[String]) -> AllowOrigin {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    AllowOrigin::predicate(move |origin: &HeaderValue, _req| allowed.iter().any(|v| v == origin))
}

/// Apply the CORS policy to the given Router.
///
/// IMPORTANT:
/// - Never combine wildcard origin (`Any`) with `allow_credentials(true)`.
pub fn apply(router: Router, config: &Config) -> Router {
    let mut allow_headers = vec![
        header::AUTHORIZATION,
        header::CONTENT_TYPE,
        header::ACCEPT,
        HeaderName::from_static("x-request-id"),
    ];
    // Direct (no-gateway) dev setups send the forwarded identity header
    // from the browser.
    if let Some(name) = &config.forwarded_user_header {
        allow_headers.push(name.clone());
    }

    let cors = if config.app_env.is_production() {
        CorsLayer::new().allow_origin(exact_origin_allowlist(&config.cors_allowed_origins))
    } else {
        // Development: permissive (no credentials)
        CorsLayer::new().allow_origin(Any)
    }
    .allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ])
    .allow_headers(allow_headers)
    .max_age(std::time::Duration::from_secs(60 * 10));

    router.layer(cors)
}
