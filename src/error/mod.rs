//! Error types and handling for metadecode
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`decode`]: Format resolution, parsing and typed conversion errors
//! - [`config`]: Sync configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod decode;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for metadecode operations
#[derive(Error, Diagnostic, Debug)]
pub enum MetaError {
    // Decode errors
    #[error("Unmarshal of format '{format}' is not supported")]
    #[diagnostic(
        code(metadecode::decode::unsupported_format),
        help("Supported formats: json, toml, yaml")
    )]
    UnsupportedFormat { format: String },

    #[error("Unmarshal to {kind} is not supported")]
    #[diagnostic(
        code(metadecode::decode::unsupported_type),
        help("Supported targets: string, map, slice, bool, int, int64, float")
    )]
    UnsupportedType { kind: String },

    #[error("Failed to unmarshal {format}: {message}")]
    #[diagnostic(code(metadecode::decode::parse_failed))]
    ParseFailure { format: String, message: String },

    #[error("Unable to convert '{value}' to {target}")]
    #[diagnostic(code(metadecode::decode::type_conversion))]
    TypeConversion { value: String, target: String },

    // File system errors
    #[error("'{path}' is not a valid configuration format")]
    #[diagnostic(
        code(metadecode::fs::unknown_format),
        help("Use a .json, .toml, .yaml or .yml file, or pass the format explicitly")
    )]
    UnknownFileFormat { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(metadecode::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(metadecode::fs::io_error))]
    IoError { message: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(metadecode::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(metadecode::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(metadecode::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },
}

impl From<std::io::Error> for MetaError {
    fn from(err: std::io::Error) -> Self {
        MetaError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for MetaError {
    fn from(err: serde_yaml::Error) -> Self {
        MetaError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MetaError {
    fn from(err: serde_json::Error) -> Self {
        MetaError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MetaError>;
