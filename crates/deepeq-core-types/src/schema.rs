//! Canonical schema constants for structured logging
//!
//! These constants keep the comparator's events consistent with the
//! field names asserted on by test capture.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_LABEL: &str = "label";

// Traversal fields
pub const FIELD_PATH: &str = "path";
pub const FIELD_VISITED: &str = "visited";
pub const FIELD_MEMBER_ORDER: &str = "member_order";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Operation names
pub const OP_COMPARE: &str = "compare";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
