//! Bearer-token middleware: verify `Authorization` → Principal into extensions.
//!
//! This layer never rejects a request. A missing, malformed or invalid
//! token simply leaves the request without a Principal; routes that
//! require an identity enforce that through their identity extractor.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::services::auth::Authentication;
use crate::state::AppState;

/// Attach bearer verification to every route of the given router.
///
/// Example:
/// ```ignore
/// let v1 = api::v1::routes::routes();
/// let v1 = middleware::auth::bearer::apply(v1, state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8's from_fn cannot take a State extractor, so pass state explicitly
    router.layer(middleware::from_fn_with_state(state, bearer_middleware))
}

async fn bearer_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if let Authentication::Verified(principal) = state.verifier.authenticate(authorization) {
        tracing::debug!(user_id = %principal.user_id, "request authenticated");
        // middleware → extractor hand-off
        req.extensions_mut().insert(principal);
    }

    next.run(req).await
}
