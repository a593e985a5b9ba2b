/*
 * Responsibility
 * - JSON request bodies for the v1 handlers
 * - axum's own Json rejection is a plain-text response; remap it onto
 *   AppError so an undeserializable body (bad syntax, wrong content
 *   type, unknown enum value) answers 400 INVALID_REQUEST with the
 *   standard envelope. The body-size cap keeps its 413.
 */
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// `axum::Json` with the rejection folded into the shared error body.
///
/// Extractor-only; responses keep using `axum::Json` directly.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            // An over-long body without a declared length surfaces here;
            // with a declared length the transport cap answers before the
            // router runs. Same status either way.
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                Err(AppError::PayloadTooLarge)
            }
            Err(rejection) => Err(AppError::bad_request("INVALID_REQUEST", rejection.body_text())),
        }
    }
}
