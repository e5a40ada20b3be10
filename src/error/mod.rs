//! Error types and handling for embedgen
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: Asset input and generated output errors
//! - [`config`]: Manifest errors

pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for embedgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum EmbedError {
    // Asset errors
    #[error("Failed to read asset: {path}: {reason}")]
    #[diagnostic(
        code(embedgen::fs::input_read_failed),
        help("Check that the asset exists in the base directory and is readable")
    )]
    InputReadFailed { path: String, reason: String },

    #[error("Failed to write generated file: {path}: {reason}")]
    #[diagnostic(
        code(embedgen::fs::output_write_failed),
        help("Check that the base directory is writable and has free space")
    )]
    OutputWriteFailed { path: String, reason: String },

    #[error("{count} generated file(s) out of date: {paths}")]
    #[diagnostic(
        code(embedgen::check::stale),
        help("Run 'embedgen generate' to regenerate them")
    )]
    OutputsStale { count: usize, paths: String },

    // Configuration errors
    #[error("Manifest not found: {path}")]
    #[diagnostic(code(embedgen::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read manifest: {path}: {reason}")]
    #[diagnostic(code(embedgen::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse manifest: {path}: {reason}")]
    #[diagnostic(
        code(embedgen::config::parse_failed),
        help("Expected an 'assets' list of stem/symbol pairs")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(embedgen::config::invalid))]
    ConfigInvalid { message: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(embedgen::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(embedgen::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for EmbedError {
    fn from(err: std::io::Error) -> Self {
        EmbedError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for EmbedError {
    fn from(err: serde_json::Error) -> Self {
        EmbedError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, EmbedError>;
