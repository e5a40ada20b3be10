//! Manifest errors

use super::EmbedError;

/// Creates a manifest not found error
pub fn not_found(path: impl Into<String>) -> EmbedError {
    EmbedError::ConfigNotFound { path: path.into() }
}

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> EmbedError {
    EmbedError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> EmbedError {
    EmbedError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a manifest read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> EmbedError {
    EmbedError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
