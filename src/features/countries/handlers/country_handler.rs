use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::countries::dtos::{CountriesResponseDto, CreateCountryDto};
use crate::features::countries::models::Country;
use crate::features::countries::services::CountryService;
use crate::shared::types::{CreatedResponse, ErrorResponse};

/// List all countries
#[utoipa::path(
    get,
    path = "/countries/read",
    responses(
        (status = 200, description = "Countries with record count", body = CountriesResponseDto)
    ),
    tag = "countries"
)]
pub async fn read_countries(
    State(service): State<Arc<CountryService>>,
) -> Result<Json<CountriesResponseDto>> {
    let countries = service.read()?;
    let num_records = countries.len();
    Ok(Json(CountriesResponseDto {
        countries,
        num_records,
    }))
}

/// Create a country
#[utoipa::path(
    post,
    path = "/countries",
    request_body = CreateCountryDto,
    responses(
        (status = 201, description = "Country created", body = CreatedResponse),
        (status = 400, description = "Validation error or id already taken", body = ErrorResponse)
    ),
    tag = "countries"
)]
pub async fn create_country(
    State(service): State<Arc<CountryService>>,
    AppJson(dto): AppJson<CreateCountryDto>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let id = service.create(dto)?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Get a country by id
#[utoipa::path(
    get,
    path = "/countries/{id}",
    params(("id" = String, Path, description = "Country id")),
    responses(
        (status = 200, description = "Country record", body = Country),
        (status = 404, description = "Country not found", body = ErrorResponse)
    ),
    tag = "countries"
)]
pub async fn get_country(
    State(service): State<Arc<CountryService>>,
    Path(id): Path<String>,
) -> Result<Json<Country>> {
    let country = service.get_by_id(&id)?;
    Ok(Json(country))
}
