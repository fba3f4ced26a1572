//! Decoding of JSON, YAML and TOML into generic values
//!
//! The [`Decoder`] turns bytes in a known [`Format`] into a [`serde_json::Value`]
//! tree. Whatever the source format, every mapping in the result has string
//! keys: YAML trees are rebuilt by the `normalize` pass before they are
//! returned.
//!
//! ## Entry points
//!
//! - [`Decoder::decode_to_mapping`]: front matter, where the top level must be a mapping
//! - [`Decoder::decode_to_value`]: data files, where any top level is allowed
//! - [`Decoder::decode_typed`]: a single string decoded into a caller-chosen shape
//! - [`Decoder::decode_file_to_mapping`]: reads a file and picks the format from its extension
//!
//! ```rust
//! use metadecode::{Decoder, Format};
//!
//! let decoder = Decoder::default();
//! let front_matter = decoder.decode_to_mapping(b"title: Hello\ntrue: yes", Format::Yaml)?;
//! assert_eq!(front_matter["title"], "Hello");
//! assert!(front_matter.contains_key("true"));
//! # Ok::<(), metadecode::MetaError>(())
//! ```

mod normalize;
mod target;

pub use target::{TargetKind, TypedValue};

use std::path::Path;

use serde_json::Value;
use serde_yaml::Value as YamlValue;
use tracing::{debug, warn};

use crate::cast;
use crate::error::{MetaError, Result, decode, fs};
use crate::format::Format;

/// A decoded mapping with string keys.
pub type Mapping = serde_json::Map<String, Value>;

/// Decoder options.
///
/// The options only affect delimited (CSV) data; JSON, YAML and TOML decode
/// the same under any configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decoder {
    /// Field delimiter. Defaults to `,`.
    pub delimiter: char,
    /// Lines starting with this character are ignored.
    pub comment: Option<char>,
}

impl Default for Decoder {
    fn default() -> Self {
        Self {
            delimiter: ',',
            comment: None,
        }
    }
}

#[allow(clippy::unused_self)]
impl Decoder {
    /// Cache key for this option set: the delimiter followed by the comment character.
    pub fn options_key(&self) -> String {
        let mut key = String::with_capacity(2);
        key.push(self.delimiter);
        if let Some(comment) = self.comment {
            key.push(comment);
        }
        key
    }

    /// Decode `data` into a new mapping.
    ///
    /// Empty input and documents that decode to null give an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns [`MetaError::UnsupportedFormat`] for [`Format::Unspecified`], and
    /// [`MetaError::ParseFailure`] if the parser rejects the input or its top
    /// level is not a mapping.
    pub fn decode_to_mapping(&self, data: &[u8], format: Format) -> Result<Mapping> {
        if data.is_empty() {
            return Ok(Mapping::new());
        }

        match self.decode(data, format)? {
            Value::Object(mapping) => Ok(mapping),
            Value::Null => Ok(Mapping::new()),
            other => Err(parse_error(
                format,
                format!(
                    "expected a mapping at the top level, found {}",
                    describe(&other)
                ),
            )),
        }
    }

    /// Read `path` and decode it into a mapping, resolving the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns [`MetaError::UnknownFileFormat`] if the extension names no
    /// supported format, [`MetaError::FileReadFailed`] if the file cannot be
    /// read, and any error of [`Decoder::decode_to_mapping`].
    pub fn decode_file_to_mapping(&self, path: &Path) -> Result<Mapping> {
        let format = Format::from_extension(&path.to_string_lossy());
        if !format.is_specified() {
            return Err(fs::unknown_format(path.display().to_string()));
        }

        let data = std::fs::read(path)
            .map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))?;
        debug!(path = %path.display(), %format, "decoding file");

        self.decode_to_mapping(&data, format)
    }

    /// Decode a trimmed string into the shape selected by `target`.
    ///
    /// Mappings are sniffed with [`Format::from_content`]; sequences are always
    /// read as YAML, and blank input gives `Sequence(Value::Null)`; scalars use
    /// the permissive conversions in [`crate::cast`].
    ///
    /// # Errors
    ///
    /// Returns [`MetaError::TypeConversion`] when a scalar target cannot be
    /// parsed, and the decode errors of the chosen format for mappings and
    /// sequences.
    pub fn decode_typed(&self, data: &str, target: TargetKind) -> Result<TypedValue> {
        let data = data.trim();
        let converted = match target {
            TargetKind::String => return Ok(TypedValue::String(data.to_string())),
            TargetKind::Mapping => {
                let format = Format::from_content(data);
                return self
                    .decode_to_mapping(data.as_bytes(), format)
                    .map(TypedValue::Mapping);
            }
            TargetKind::Sequence if data.is_empty() => {
                return Ok(TypedValue::Sequence(Value::Null));
            }
            TargetKind::Sequence => {
                return self
                    .decode(data.as_bytes(), Format::Yaml)
                    .map(TypedValue::Sequence);
            }
            TargetKind::Bool => cast::to_bool(data).map(TypedValue::Bool),
            TargetKind::Int => cast::to_isize(data).map(TypedValue::Int),
            TargetKind::Int64 => cast::to_i64(data).map(TypedValue::Int64),
            TargetKind::Float => cast::to_f64(data).map(TypedValue::Float),
        };

        converted.ok_or_else(|| decode::type_conversion(data, target.name()))
    }

    /// Decode `data` with no constraint on the top-level shape.
    ///
    /// Empty input gives an empty mapping.
    ///
    /// # Errors
    ///
    /// See [`Decoder::decode`].
    pub fn decode_to_value(&self, data: &[u8], format: Format) -> Result<Value> {
        if data.is_empty() {
            return Ok(Value::Object(Mapping::new()));
        }
        self.decode(data, format)
    }

    /// Route `data` to the parser for `format`.
    ///
    /// # Errors
    ///
    /// Returns [`MetaError::UnsupportedFormat`] for [`Format::Unspecified`] and
    /// [`MetaError::ParseFailure`], tagged with the format, when the parser
    /// rejects the input.
    pub fn decode(&self, data: &[u8], format: Format) -> Result<Value> {
        let parsed = match format {
            Format::Json => decode_json(data),
            Format::Toml => decode_toml(data),
            Format::Yaml => decode_yaml(data),
            Format::Unspecified => return Err(decode::unsupported_format(format)),
        };

        parsed.map_err(|message| parse_error(format, message))
    }
}

fn decode_json(data: &[u8]) -> std::result::Result<Value, String> {
    serde_json::from_slice(data).map_err(|e| e.to_string())
}

fn decode_toml(data: &[u8]) -> std::result::Result<Value, String> {
    let text = std::str::from_utf8(data).map_err(|e| e.to_string())?;
    let table: toml::Table = toml::from_str(text).map_err(|e| e.to_string())?;
    Ok(normalize::toml_to_json(toml::Value::Table(table)))
}

fn decode_yaml(data: &[u8]) -> std::result::Result<Value, String> {
    let mut value: YamlValue = serde_yaml::from_slice(data).map_err(|e| e.to_string())?;
    value.apply_merge().map_err(|e| e.to_string())?;
    Ok(normalize::yaml_to_json(value))
}

/// Wrap a parser message with its format and emit the error-path diagnostic.
fn parse_error(format: Format, message: impl Into<String>) -> MetaError {
    let err = decode::parse_failure(format, message);
    warn!(%format, error = %err, "decode failed");
    err
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests;
