//! Canonical schema constants for structured logging
//!
//! Field keys and event names shared by the logging macros, the test capture
//! layer and anything that inspects emitted events.

// Canonical field keys
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_CLUB_NAME: &str = "club_name";
pub const FIELD_STORE_KEY: &str = "store_key";

// Collection sizes
pub const FIELD_CLUB_COUNT: &str = "club_count";
pub const FIELD_EVENT_COUNT: &str = "event_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
