use serde::Serialize;
use strum::{AsRefStr, Display};

/// Message shown whenever a failure has no message fit for display.
pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred";

pub const AUTHENTICATION_REQUIRED: &str = "Authentication required";
pub const RESOURCE_NOT_FOUND: &str = "Resource not found";

/// Machine readable code attached to the well-known error kinds.
#[derive(AsRefStr, Display, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    AuthError,
    NotFound,
}

/// Closed taxonomy of failures surfaced to the UI layer.
///
/// `Validation` is the only field-scoped kind: the UI attaches its message to
/// the input named by `field`. Every other kind is rendered as a top-level
/// message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Server(String),

    #[error("An unexpected error occurred")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    pub fn validation(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    pub fn authentication() -> Self {
        Self::Authentication(AUTHENTICATION_REQUIRED.to_owned())
    }

    pub fn not_found() -> Self {
        Self::NotFound(RESOURCE_NOT_FOUND.to_owned())
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::Authentication(_) => 401,
            Self::NotFound(_) => 404,
            Self::Server(_) | Self::Unknown(_) => 500,
        }
    }

    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Validation { .. } => Some(ErrorCode::ValidationError),
            Self::Authentication(_) => Some(ErrorCode::AuthError),
            Self::NotFound(_) => Some(ErrorCode::NotFound),
            Self::Server(_) | Self::Unknown(_) => None,
        }
    }

    /// Name of the offending input, only ever set on validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            message: self.message(),
            status_code: self.status_code(),
            code: self.code().map(|code| code.to_string()),
            field: self.field().map(ToOwned::to_owned),
        }
    }
}

/// Serializable view of an [`AppError`] as consumed by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub message: String,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(value: argon2::password_hash::Error) -> Self {
        Self::Unknown(anyhow::anyhow!(value))
    }
}

#[macro_export]
macro_rules! invalid {
    ($field:expr, $($arg:tt)+) => {
        return Err($crate::AppError::validation(format!($($arg)+), $field))
    };
}

#[macro_export]
macro_rules! unauthenticated {
    () => {
        return Err($crate::AppError::authentication())
    };
    ($($arg:tt)+) => {
        return Err($crate::AppError::Authentication(format!($($arg)+)))
    };
}

#[macro_export]
macro_rules! not_found {
    () => {
        return Err($crate::AppError::not_found())
    };
    ($($arg:tt)+) => {
        return Err($crate::AppError::NotFound(format!($($arg)+)))
    };
}
