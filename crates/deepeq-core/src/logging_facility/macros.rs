//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.
//! They expand through `$crate` re-exports, so callers need neither
//! `tracing` nor `deepeq-core-types` in their own dependencies.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use deepeq_core::log_op_start;
/// log_op_start!("compare");
/// log_op_start!("compare", label = "orders");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {{
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    }};
    ($op:expr, $($field:tt)*) => {{
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    }};
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use deepeq_core::log_op_end;
/// log_op_end!("compare", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {{
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    }};
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    }};
}

/// Log an operation that ended in an inequality
///
/// # Example
///
/// ```
/// # use deepeq_core::{compare, log_op_error};
/// let err = compare(&1_i32, &2_i32).unwrap_err();
/// log_op_error!("compare", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let inequality: &$crate::errors::Inequality = &$err;
        $crate::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?inequality.reason(),
            err.code = inequality.code(),
            path = inequality.path().unwrap_or_default(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let inequality: &$crate::errors::Inequality = &$err;
        $crate::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?inequality.reason(),
            err.code = inequality.code(),
            path = inequality.path().unwrap_or_default(),
            $($field)*
        );
    }};
}
