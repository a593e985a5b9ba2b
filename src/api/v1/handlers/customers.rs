/*
 * Responsibility
 * - /customers/me handlers
 * - Identity rule: verified token subject only; the forwarded header
 *   plays no role here
 */
use axum::{Json, extract::State};

use crate::{
    api::v1::dto::customers::{CustomerResponse, UpdateCustomerRequest},
    api::v1::extractors::{JsonBody, VerifiedIdentity},
    error::AppError,
    repos::customer_repo::{self, CustomerRow},
    state::AppState,
};

fn to_response(state: &AppState, row: CustomerRow) -> Result<CustomerResponse, AppError> {
    Ok(CustomerResponse {
        id: state.id_codec.encode(row.customer_id)?,
        user_id: row.user_id,
        name: row.name,
        email: row.email,
        phone: row.phone,
    })
}

pub async fn me(
    State(state): State<AppState>,
    identity: VerifiedIdentity,
) -> Result<Json<CustomerResponse>, AppError> {
    let row = customer_repo::find_by_user_id(&state.db, &identity.user_id)
        .await?
        .ok_or(AppError::not_found("customer"))?;

    Ok(Json(to_response(&state, row)?))
}

pub async fn update_me(
    State(state): State<AppState>,
    identity: VerifiedIdentity,
    JsonBody(req): JsonBody<UpdateCustomerRequest>,
) -> Result<Json<CustomerResponse>, AppError> {
    req.validate()
        .map_err(|m| AppError::bad_request("INVALID_REQUEST", m))?;

    // Merge-upsert: creates the profile on first write, then overwrites
    // only the fields present in the body
    let row = customer_repo::upsert(
        &state.db,
        &identity.user_id,
        req.name.as_deref(),
        req.email.as_deref(),
        req.phone.as_deref(),
    )
    .await?;

    Ok(Json(to_response(&state, row)?))
}
