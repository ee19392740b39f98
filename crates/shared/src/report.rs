use std::backtrace::BacktraceStatus;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{AppError, ErrorBody, FALLBACK_MESSAGE};

/// Resolve any failure into a string safe to show to an end user.
///
/// Errors of the [`AppError`] family yield their own message (internal
/// failures already render as the fallback). Any other error yields its
/// display text, or the fallback when it has none.
pub fn handle_error(error: &anyhow::Error) -> String {
    if let Some(err) = error.downcast_ref::<AppError>() {
        return err.message();
    }

    let message = error.to_string();
    if message.trim().is_empty() {
        return FALLBACK_MESSAGE.to_owned();
    }

    message
}

/// Wire body for any failure. Errors outside the [`AppError`] family are
/// reported as a 500 carrying the [`handle_error`] message.
pub fn error_body(error: &anyhow::Error) -> ErrorBody {
    match error.downcast_ref::<AppError>() {
        Some(err) => err.body(),
        None => ErrorBody {
            message: handle_error(error),
            status_code: 500,
            code: None,
            field: None,
        },
    }
}

/// Emit a timestamped diagnostic for `error`, with its backtrace when one was
/// captured. Never fails and never affects control flow.
pub fn log_error(error: &anyhow::Error, context: Option<&str>) {
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();
    let context = context.unwrap_or("Error");
    let message = handle_error(error);

    tracing::error!(%timestamp, context, "[{timestamp}] {context}: {message}");

    let backtrace = error.backtrace();
    if backtrace.status() == BacktraceStatus::Captured {
        tracing::debug!(context, "Stack: {backtrace}");
    }
}
