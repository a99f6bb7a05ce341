use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::countries::models::Country;

/// Request DTO for creating a country
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCountryDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "capital must not be empty"))]
    pub capital: String,

    /// Explicit id; omitted ids are assigned sequentially
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Response body for the list endpoint: the whole id -> country mapping
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CountriesResponseDto {
    #[serde(rename = "Countries")]
    pub countries: BTreeMap<String, Country>,
    #[serde(rename = "Number of Records")]
    pub num_records: usize,
}
