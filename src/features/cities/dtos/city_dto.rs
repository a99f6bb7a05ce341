use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::cities::models::City;

/// Request DTO for creating a city
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCityDto {
    /// City name (required, non-blank)
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    /// Optional two-letter state code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
}

/// Request DTO for a partial city update; absent fields are left untouched
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCityDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
}

/// Request DTO for deleting a city by natural key
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct DeleteCityDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "state_code must not be empty"))]
    pub state_code: String,
}

/// Query parameters for the list endpoint
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct SortQuery {
    /// Sort field; prefix with '-' for descending (e.g. `-name`).
    /// Unknown fields leave the order untouched.
    #[param(example = "-name")]
    pub sort: Option<String>,
}

/// Response body for the list endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CitiesResponseDto {
    #[serde(rename = "Cities")]
    pub cities: Vec<City>,
    #[serde(rename = "Number of Records")]
    pub num_records: usize,
}
