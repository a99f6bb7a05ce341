use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::cities::dtos::{
    CitiesResponseDto, CreateCityDto, DeleteCityDto, SortQuery, UpdateCityDto,
};
use crate::features::cities::models::City;
use crate::features::cities::services::CityService;
use crate::shared::types::{CreatedResponse, ErrorResponse, MessageResponse};

/// List all cities
#[utoipa::path(
    get,
    path = "/cities/read",
    params(SortQuery),
    responses(
        (status = 200, description = "Cities with record count", body = CitiesResponseDto),
        (status = 500, description = "Store unreachable", body = ErrorResponse)
    ),
    tag = "cities"
)]
pub async fn read_cities(
    State(service): State<Arc<CityService>>,
    Query(query): Query<SortQuery>,
) -> Result<Json<CitiesResponseDto>> {
    let cities = service.read_sorted(query.sort.as_deref()).await?;
    let num_records = cities.len();
    Ok(Json(CitiesResponseDto {
        cities,
        num_records,
    }))
}

/// Create a city
#[utoipa::path(
    post,
    path = "/cities",
    request_body = CreateCityDto,
    responses(
        (status = 201, description = "City created", body = CreatedResponse),
        (status = 400, description = "Validation error", body = ErrorResponse)
    ),
    tag = "cities"
)]
pub async fn create_city(
    State(service): State<Arc<CityService>>,
    AppJson(dto): AppJson<CreateCityDto>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let id = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Get a city by id
#[utoipa::path(
    get,
    path = "/cities/{id}",
    params(("id" = String, Path, description = "City id")),
    responses(
        (status = 200, description = "City document", body = City),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "City not found", body = ErrorResponse)
    ),
    tag = "cities"
)]
pub async fn get_city(
    State(service): State<Arc<CityService>>,
    Path(id): Path<String>,
) -> Result<Json<City>> {
    let city = service.get_by_id(&id).await?;
    Ok(Json(city))
}

/// Update a city by id
#[utoipa::path(
    put,
    path = "/cities/{id}",
    params(("id" = String, Path, description = "City id")),
    request_body = UpdateCityDto,
    responses(
        (status = 200, description = "City updated", body = MessageResponse),
        (status = 400, description = "Invalid id or fields", body = ErrorResponse),
        (status = 404, description = "City not found", body = ErrorResponse)
    ),
    tag = "cities"
)]
pub async fn update_city(
    State(service): State<Arc<CityService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateCityDto>,
) -> Result<Json<MessageResponse>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    // Existence check first so a missing id is a 404, not a quiet no-op.
    service.get_by_id(&id).await?;
    service.update_by_id(&id, dto).await?;
    Ok(Json(MessageResponse::new("Updated")))
}

/// Delete a city by id
#[utoipa::path(
    delete,
    path = "/cities/{id}",
    params(("id" = String, Path, description = "City id")),
    responses(
        (status = 200, description = "City deleted", body = MessageResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "City not found", body = ErrorResponse)
    ),
    tag = "cities"
)]
pub async fn delete_city(
    State(service): State<Arc<CityService>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    if !service.delete_by_id(&id).await? {
        return Err(AppError::NotFound(format!("City not found: {id}")));
    }
    Ok(Json(MessageResponse::new("Deleted")))
}

/// Delete a city by name and state code
#[utoipa::path(
    delete,
    path = "/cities",
    request_body = DeleteCityDto,
    responses(
        (status = 200, description = "City deleted", body = MessageResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "No matching city", body = ErrorResponse)
    ),
    tag = "cities"
)]
pub async fn delete_city_by_key(
    State(service): State<Arc<CityService>>,
    AppJson(dto): AppJson<DeleteCityDto>,
) -> Result<Json<MessageResponse>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.delete(&dto.name, &dto.state_code).await?;
    Ok(Json(MessageResponse::new("Deleted")))
}
