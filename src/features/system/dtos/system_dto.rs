use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Smoke-test body for `/hello`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HelloResponseDto {
    pub hello: String,
}

/// Live route catalog served by `/endpoints`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EndpointsResponseDto {
    #[serde(rename = "Available endpoints")]
    pub available_endpoints: Vec<String>,
}
