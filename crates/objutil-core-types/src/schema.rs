//! Canonical schema constants for structured logging and events
//!
//! These constants keep log field names consistent between the operations
//! that emit them and the tests that assert on them.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Operation payload sizes
pub const FIELD_KEY_COUNT: &str = "key_count";
pub const FIELD_NAME_COUNT: &str = "name_count";
pub const FIELD_CHANGED_COUNT: &str = "changed_count";

// Mapping flavour ("plain" / "rich")
pub const FIELD_MAPPING_KIND: &str = "mapping_kind";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
