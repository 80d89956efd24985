//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use tumikia_core::log_op_start;
/// log_op_start!("handle_event");
/// log_op_start!("handle_event", intent = "submit");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = tumikia_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = tumikia_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use tumikia_core::log_op_end;
/// log_op_end!("handle_event");
/// log_op_end!("handle_event", record_count = 6);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = tumikia_core_types::schema::EVENT_END,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = tumikia_core_types::schema::EVENT_END,
            $($field)*
        );
    };
}

/// Log an operation error with its canonical kind and code
///
/// # Example
///
/// ```
/// # use tumikia_core::{log_op_error, errors::RegistryError};
/// let err = RegistryError::WardNotFound { ward_id: 9 };
/// log_op_error!("submit", err);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr) => {{
        use $crate::errors::RegError;
        let reg_err: RegError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = tumikia_core_types::schema::EVENT_END_ERROR,
            err_kind = ?reg_err.kind(),
            err_code = reg_err.code(),
        );
    }};
    ($op:expr, $err:expr, $($field:tt)*) => {{
        use $crate::errors::RegError;
        let reg_err: RegError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = tumikia_core_types::schema::EVENT_END_ERROR,
            err_kind = ?reg_err.kind(),
            err_code = reg_err.code(),
            $($field)*
        );
    }};
}
