//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical between the emitting
//! macros and anything that inspects the events.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_PET_ID: &str = "pet_id";

// Write outcomes
pub const FIELD_ROWS_AFFECTED: &str = "rows_affected";
pub const FIELD_PET_COUNT: &str = "pet_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
