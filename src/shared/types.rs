use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform error body: every 4xx/5xx response carries `{"Error": <message>}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[serde(rename = "Error")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Acknowledgement body for successful mutations (`{"Message": "Updated"}`).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[serde(rename = "Message")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body returned by create endpoints: the store-assigned (or generated) id.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Record totals across all three entity services.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CountsResponse {
    pub cities: usize,
    pub states: usize,
    pub countries: usize,
}
