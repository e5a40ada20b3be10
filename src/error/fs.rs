//! Asset input and generated output errors

use std::path::Path;

use super::EmbedError;

/// Creates an asset read failed error
pub fn input_read_failed(path: impl Into<String>, reason: impl Into<String>) -> EmbedError {
    EmbedError::InputReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a generated file write failed error
pub fn output_write_failed(path: impl Into<String>, reason: impl Into<String>) -> EmbedError {
    EmbedError::OutputWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a stale outputs error from the offending paths
pub fn outputs_stale(paths: &[&Path]) -> EmbedError {
    EmbedError::OutputsStale {
        count: paths.len(),
        paths: paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> EmbedError {
    EmbedError::IoError {
        message: message.into(),
    }
}
