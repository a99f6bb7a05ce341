use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A state document as stored. `id` is absent until the store assigns one.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct State {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub code: String,
    pub country_code: String,
}

impl State {
    /// Cache key: the composite natural key the uniqueness invariant
    /// is defined over.
    pub fn composite_key(&self) -> (String, String) {
        (self.code.clone(), self.country_code.clone())
    }
}
