//! Decode errors

use super::MetaError;
use crate::format::Format;

/// Creates an unsupported format error
pub fn unsupported_format(format: Format) -> MetaError {
    MetaError::UnsupportedFormat {
        format: format.to_string(),
    }
}

/// Creates an unsupported target type error
pub fn unsupported_type(kind: impl Into<String>) -> MetaError {
    MetaError::UnsupportedType { kind: kind.into() }
}

/// Creates a parse failure tagged with the originating format
pub fn parse_failure(format: Format, message: impl Into<String>) -> MetaError {
    MetaError::ParseFailure {
        format: format.to_string(),
        message: message.into(),
    }
}

/// Creates a scalar conversion error
pub fn type_conversion(value: impl Into<String>, target: impl Into<String>) -> MetaError {
    MetaError::TypeConversion {
        value: value.into(),
        target: target.into(),
    }
}
