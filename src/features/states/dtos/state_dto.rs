use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::states::models::State;

/// Request DTO for creating a state
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateStateDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    /// State code, e.g. "NY"
    #[validate(length(min = 1, message = "code must not be empty"))]
    pub code: String,

    /// Country the state belongs to, e.g. "USA"
    #[validate(length(min = 1, message = "country_code must not be empty"))]
    pub country_code: String,
}

/// Request DTO for a partial state update; absent fields are left untouched
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateStateDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "code must not be empty"))]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "country_code must not be empty"))]
    pub country_code: Option<String>,
}

/// Request DTO for deleting a state by natural key
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct DeleteStateDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "code must not be empty"))]
    pub code: String,
}

/// Response body for the list endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatesResponseDto {
    #[serde(rename = "States")]
    pub states: Vec<State>,
    #[serde(rename = "Number of Records")]
    pub num_records: usize,
}
