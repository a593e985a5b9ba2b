/*
 * Responsibility
 * - /vehicles handlers
 * - Identity rule: forwarded header first, then token subject
 * - Replace and delete are owner-scoped: someone else's vehicle id
 *   answers 404, never a cross-user write
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::v1::dto::vehicles::{VehicleRequest, VehicleResponse},
    api::v1::extractors::{ForwardedIdentity, JsonBody, PublicVehicleId},
    error::AppError,
    repos::vehicle_repo::{self, VehicleRow},
    state::AppState,
};

fn to_response(state: &AppState, row: VehicleRow) -> Result<VehicleResponse, AppError> {
    Ok(VehicleResponse {
        id: state.id_codec.encode(row.vehicle_id)?,
        customer_user_id: row.customer_user_id,
        make: row.make,
        model: row.model,
        plate_no: row.plate_no,
        year: row.year,
    })
}

pub async fn list_vehicles(
    State(state): State<AppState>,
    identity: ForwardedIdentity,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let rows = vehicle_repo::list_by_owner(&state.db, &identity.user_id).await?;

    let res = rows
        .into_iter()
        .map(|row| to_response(&state, row))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(res))
}

pub async fn create_vehicle(
    State(state): State<AppState>,
    identity: ForwardedIdentity,
    JsonBody(req): JsonBody<VehicleRequest>,
) -> Result<(StatusCode, Json<VehicleResponse>), AppError> {
    req.validate()
        .map_err(|m| AppError::bad_request("INVALID_REQUEST", m))?;

    let row = vehicle_repo::create(
        &state.db,
        &identity.user_id,
        req.make.as_deref(),
        req.model.as_deref(),
        req.plate_no.as_deref(),
        req.year,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(to_response(&state, row)?)))
}

pub async fn update_vehicle(
    State(state): State<AppState>,
    identity: ForwardedIdentity,
    vehicle_id: PublicVehicleId,
    JsonBody(req): JsonBody<VehicleRequest>,
) -> Result<Json<VehicleResponse>, AppError> {
    req.validate()
        .map_err(|m| AppError::bad_request("INVALID_REQUEST", m))?;

    // Full replace: fields absent from the body become null
    let row = vehicle_repo::replace(
        &state.db,
        vehicle_id.id,
        &identity.user_id,
        req.make.as_deref(),
        req.model.as_deref(),
        req.plate_no.as_deref(),
        req.year,
    )
    .await?
    .ok_or(AppError::not_found("vehicle"))?;

    Ok(Json(to_response(&state, row)?))
}

pub async fn delete_vehicle(
    State(state): State<AppState>,
    identity: ForwardedIdentity,
    vehicle_id: PublicVehicleId,
) -> Result<StatusCode, AppError> {
    let deleted = vehicle_repo::delete(&state.db, vehicle_id.id, &identity.user_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("vehicle"))
    }
}
