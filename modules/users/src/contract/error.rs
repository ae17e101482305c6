use thiserror::Error;
use uuid::Uuid;

/// Errors that are safe to expose to API callers
#[derive(Error, Debug, Clone)]
pub enum UsersError {
    #[error("user not found: {id}")]
    NotFound { id: Uuid },

    #[error("email '{email}' is already in use")]
    Conflict { email: String },

    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("internal error")]
    Internal,
}

impl UsersError {
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    pub fn conflict(email: String) -> Self {
        Self::Conflict { email }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::Internal
    }

    /// Stable machine-readable kind, surfaced in API error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict { .. } => "CONFLICT",
            Self::Validation { .. } => "VALIDATION",
            Self::Internal => "INTERNAL",
        }
    }
}
