use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::system::dtos::{EndpointsResponseDto, HelloResponseDto};
use crate::features::system::routes::{endpoint_catalog, SystemState};
use crate::shared::types::{CountsResponse, ErrorResponse, HealthResponse};

/// Liveness check that also proves the document store is reachable
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and store are up", body = HealthResponse),
        (status = 500, description = "Store unreachable", body = ErrorResponse)
    ),
    tag = "system"
)]
pub async fn health(State(state): State<Arc<SystemState>>) -> Result<Json<HealthResponse>> {
    state.store.ping().await?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}

/// Record totals across all resources
#[utoipa::path(
    get,
    path = "/counts",
    responses(
        (status = 200, description = "Record counts per resource", body = CountsResponse),
        (status = 500, description = "Store unreachable", body = ErrorResponse)
    ),
    tag = "system"
)]
pub async fn counts(State(state): State<Arc<SystemState>>) -> Result<Json<CountsResponse>> {
    Ok(Json(CountsResponse {
        cities: state.cities.num_cities().await?,
        states: state.states.num_states().await?,
        countries: state.countries.count()?,
    }))
}

/// Trivial endpoint to see if the server is running at all
#[utoipa::path(
    get,
    path = "/hello",
    responses((status = 200, description = "Hello world", body = HelloResponseDto)),
    tag = "system"
)]
pub async fn hello() -> Json<HelloResponseDto> {
    Json(HelloResponseDto {
        hello: "world".to_string(),
    })
}

/// Sorted list of available endpoints, as live documentation
#[utoipa::path(
    get,
    path = "/endpoints",
    responses((status = 200, description = "Available endpoints", body = EndpointsResponseDto)),
    tag = "system"
)]
pub async fn endpoints() -> Json<EndpointsResponseDto> {
    let mut available = endpoint_catalog();
    available.sort();
    Json(EndpointsResponseDto {
        available_endpoints: available,
    })
}
