use std::sync::Arc;

use axum::{
    extract::{Path, State as AxumState},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::states::dtos::{
    CreateStateDto, DeleteStateDto, StatesResponseDto, UpdateStateDto,
};
use crate::features::states::models::State;
use crate::features::states::services::StateService;
use crate::shared::types::{CreatedResponse, ErrorResponse, MessageResponse};

/// List all states
#[utoipa::path(
    get,
    path = "/state/read",
    responses(
        (status = 200, description = "States with record count", body = StatesResponseDto),
        (status = 500, description = "Store unreachable", body = ErrorResponse)
    ),
    tag = "states"
)]
pub async fn read_states(
    AxumState(service): AxumState<Arc<StateService>>,
) -> Result<Json<StatesResponseDto>> {
    let states = service.read().await?;
    let num_records = states.len();
    Ok(Json(StatesResponseDto {
        states,
        num_records,
    }))
}

/// Create a state
#[utoipa::path(
    post,
    path = "/state",
    request_body = CreateStateDto,
    responses(
        (status = 201, description = "State created", body = CreatedResponse),
        (status = 400, description = "Validation error or duplicate (code, country_code)", body = ErrorResponse)
    ),
    tag = "states"
)]
pub async fn create_state(
    AxumState(service): AxumState<Arc<StateService>>,
    AppJson(dto): AppJson<CreateStateDto>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let id = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Get a state by id
#[utoipa::path(
    get,
    path = "/state/{id}",
    params(("id" = String, Path, description = "State id")),
    responses(
        (status = 200, description = "State document", body = State),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "State not found", body = ErrorResponse)
    ),
    tag = "states"
)]
pub async fn get_state(
    AxumState(service): AxumState<Arc<StateService>>,
    Path(id): Path<String>,
) -> Result<Json<State>> {
    let state = service.get_by_id(&id).await?;
    Ok(Json(state))
}

/// Update a state by id
#[utoipa::path(
    put,
    path = "/state/{id}",
    params(("id" = String, Path, description = "State id")),
    request_body = UpdateStateDto,
    responses(
        (status = 200, description = "State updated", body = MessageResponse),
        (status = 400, description = "Invalid id or fields", body = ErrorResponse),
        (status = 404, description = "State not found", body = ErrorResponse)
    ),
    tag = "states"
)]
pub async fn update_state(
    AxumState(service): AxumState<Arc<StateService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateStateDto>,
) -> Result<Json<MessageResponse>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    // Existence check first so a missing id is a 404, not a quiet no-op.
    service.get_by_id(&id).await?;
    service.update_by_id(&id, dto).await?;
    Ok(Json(MessageResponse::new("Updated")))
}

/// Delete a state by id
#[utoipa::path(
    delete,
    path = "/state/{id}",
    params(("id" = String, Path, description = "State id")),
    responses(
        (status = 200, description = "State deleted", body = MessageResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "State not found", body = ErrorResponse)
    ),
    tag = "states"
)]
pub async fn delete_state(
    AxumState(service): AxumState<Arc<StateService>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    if !service.delete_by_id(&id).await? {
        return Err(AppError::NotFound(format!("State not found: {id}")));
    }
    Ok(Json(MessageResponse::new("Deleted")))
}

/// Delete a state by name and code
#[utoipa::path(
    delete,
    path = "/state",
    request_body = DeleteStateDto,
    responses(
        (status = 200, description = "State deleted", body = MessageResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "No matching state", body = ErrorResponse)
    ),
    tag = "states"
)]
pub async fn delete_state_by_key(
    AxumState(service): AxumState<Arc<StateService>>,
    AppJson(dto): AppJson<DeleteStateDto>,
) -> Result<Json<MessageResponse>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.delete(&dto.name, &dto.code).await?;
    Ok(Json(MessageResponse::new("Deleted")))
}
