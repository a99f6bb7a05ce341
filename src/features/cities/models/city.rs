use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::{NAME, STATE_CODE};

/// A city document as stored. `id` is absent until the store assigns one.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct City {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
}

impl City {
    /// Fields `read_sorted` accepts; anything else is a silent no-op.
    pub const SORTABLE_FIELDS: [&'static str; 2] = [NAME, STATE_CODE];

    /// String value used for sorting on `field`; `None` for fields that
    /// are not sortable.
    pub fn sort_key(&self, field: &str) -> Option<&str> {
        match field {
            NAME => Some(self.name.as_str()),
            STATE_CODE => Some(self.state_code.as_deref().unwrap_or("")),
            _ => None,
        }
    }
}
