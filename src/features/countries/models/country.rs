use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A country record. The id is the key of the in-memory mapping, not a
/// field of the record itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Country {
    pub name: String,
    pub capital: String,
}
