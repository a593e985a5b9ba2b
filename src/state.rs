/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Clone is cheap: pool and verifier are reference-counted internally
 */
use std::sync::Arc;

use axum::http::HeaderName;

use crate::services::{auth::TokenVerifier, id_codec::IdCodec};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub id_codec: IdCodec,
    pub verifier: Arc<TokenVerifier>,
    /// Name of the gateway-asserted identity header; `None` disables the
    /// forwarded-identity rule everywhere (see `Config`).
    pub forwarded_user_header: Option<HeaderName>,
}

impl AppState {
    pub fn new(
        db: sqlx::PgPool,
        id_codec: IdCodec,
        verifier: Arc<TokenVerifier>,
        forwarded_user_header: Option<HeaderName>,
    ) -> Self {
        Self {
            db,
            id_codec,
            verifier,
            forwarded_user_header,
        }
    }
}
