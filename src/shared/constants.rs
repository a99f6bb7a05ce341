//! Shared constants: collection names and document field names.

/// Collection holding city documents.
pub const CITY_COLLECTION: &str = "cities";

/// Collection holding state documents.
pub const STATE_COLLECTION: &str = "states";

/// Store-assigned identity field on every persisted document.
pub const DOC_ID: &str = "_id";

pub const NAME: &str = "name";
pub const STATE_CODE: &str = "state_code";
pub const CODE: &str = "code";
