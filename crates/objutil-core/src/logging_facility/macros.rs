//! Operation boundary macros
//!
//! Each macro stamps `component` (the calling module), `op` and `event`
//! using the names in `objutil_core_types::schema`. Extra `key = value`
//! fields may follow and are passed through to `tracing` untouched.

/// Emit the `start` event of an operation at `info`
///
/// # Example
///
/// ```
/// # use objutil_core::log_op_start;
/// log_op_start!("pick");
/// log_op_start!("pick", mapping_kind = "plain", key_count = 2);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = objutil_core_types::schema::EVENT_START,
            $($($field)+)?
        )
    };
}

/// Emit the `end` event of an operation at `info`
///
/// # Example
///
/// ```
/// # use objutil_core::log_op_end;
/// log_op_end!("pick", duration_ms = 3);
/// log_op_end!("pick", duration_ms = 3, key_count = 1);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = objutil_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)+)?
        )
    };
}

/// Emit the `end_error` event of an operation at `error`
///
/// `$err` is anything convertible into [`ExError`](crate::errors::ExError);
/// its kind and stable code land in `err.kind` / `err.code`.
///
/// # Example
///
/// ```
/// # use objutil_core::{log_op_error, errors::ObjUtilError};
/// let err = ObjUtilError::CollaboratorNotRegistered { op: "pick".to_string() };
/// log_op_error!("pick", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {{
        let ex_err = $crate::errors::ExError::from($err);
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = objutil_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($($field)+)?
        )
    }};
}
