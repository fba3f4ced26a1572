//! File system errors

use super::MetaError;

/// Creates an error for a file whose extension names no known format
pub fn unknown_format(path: impl Into<String>) -> MetaError {
    MetaError::UnknownFileFormat { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> MetaError {
    MetaError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> MetaError {
    MetaError::IoError {
        message: message.into(),
    }
}
