/*
 * Responsibility
 * - /history handlers
 * - Identity rule: forwarded header first, then token subject
 * - vehicleId in the body must be well-formed but is not checked for
 *   existence
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::v1::dto::history::{CreateHistoryRequest, HistoryItemResponse},
    api::v1::extractors::{ForwardedIdentity, JsonBody},
    error::AppError,
    repos::history_repo::{self, HistoryRow},
    state::AppState,
};

fn to_response(state: &AppState, row: HistoryRow) -> Result<HistoryItemResponse, AppError> {
    let vehicle_id = row
        .vehicle_id
        .map(|id| state.id_codec.encode(id))
        .transpose()?;

    Ok(HistoryItemResponse {
        id: state.id_codec.encode(row.history_id)?,
        customer_user_id: row.customer_user_id,
        vehicle_id,
        title: row.title,
        status: row.status,
        completed_at: row.completed_at,
        cost: row.cost,
    })
}

pub async fn list_history(
    State(state): State<AppState>,
    identity: ForwardedIdentity,
) -> Result<Json<Vec<HistoryItemResponse>>, AppError> {
    let rows = history_repo::list_by_owner(&state.db, &identity.user_id).await?;

    let res = rows
        .into_iter()
        .map(|row| to_response(&state, row))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(res))
}

pub async fn add_history(
    State(state): State<AppState>,
    identity: ForwardedIdentity,
    JsonBody(req): JsonBody<CreateHistoryRequest>,
) -> Result<(StatusCode, Json<HistoryItemResponse>), AppError> {
    req.validate()
        .map_err(|m| AppError::bad_request("INVALID_REQUEST", m))?;

    let vehicle_id = req
        .vehicle_id
        .as_deref()
        .map(|public| state.id_codec.decode(public))
        .transpose()?;

    let row = history_repo::create(
        &state.db,
        &identity.user_id,
        vehicle_id,
        &req.title,
        req.status.as_str(),
        req.completed_at,
        req.cost,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(to_response(&state, row)?)))
}
