//! Target shapes for typed decoding.

use std::fmt;
use std::str::FromStr;

use serde_json::{Number, Value};

use super::Mapping;
use crate::error::{MetaError, decode::unsupported_type};

/// The shape a string should be decoded into by [`super::Decoder::decode_typed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    String,
    Mapping,
    Sequence,
    Bool,
    Int,
    Int64,
    Float,
}

impl TargetKind {
    pub fn name(self) -> &'static str {
        match self {
            TargetKind::String => "string",
            TargetKind::Mapping => "map",
            TargetKind::Sequence => "slice",
            TargetKind::Bool => "bool",
            TargetKind::Int => "int",
            TargetKind::Int64 => "int64",
            TargetKind::Float => "float64",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetKind {
    type Err = MetaError;

    /// Unknown shape names fail with [`MetaError::UnsupportedType`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "string" | "str" => Ok(TargetKind::String),
            "map" | "mapping" => Ok(TargetKind::Mapping),
            "slice" | "sequence" | "seq" => Ok(TargetKind::Sequence),
            "bool" | "boolean" => Ok(TargetKind::Bool),
            "int" => Ok(TargetKind::Int),
            "int64" => Ok(TargetKind::Int64),
            "float" | "float64" => Ok(TargetKind::Float),
            _ => Err(unsupported_type(s)),
        }
    }
}

/// Result of a typed decode, one variant per [`TargetKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    String(String),
    Mapping(Mapping),
    /// Whatever the YAML sequence syntax produced; usually an array, null for blank input.
    Sequence(Value),
    Bool(bool),
    Int(isize),
    Int64(i64),
    Float(f64),
}

impl TypedValue {
    pub fn kind(&self) -> TargetKind {
        match self {
            TypedValue::String(_) => TargetKind::String,
            TypedValue::Mapping(_) => TargetKind::Mapping,
            TypedValue::Sequence(_) => TargetKind::Sequence,
            TypedValue::Bool(_) => TargetKind::Bool,
            TypedValue::Int(_) => TargetKind::Int,
            TypedValue::Int64(_) => TargetKind::Int64,
            TypedValue::Float(_) => TargetKind::Float,
        }
    }
}

impl From<TypedValue> for Value {
    fn from(typed: TypedValue) -> Self {
        match typed {
            TypedValue::String(s) => Value::String(s),
            TypedValue::Mapping(m) => Value::Object(m),
            TypedValue::Sequence(v) => v,
            TypedValue::Bool(b) => Value::Bool(b),
            TypedValue::Int(i) => Value::from(i),
            TypedValue::Int64(i) => Value::from(i),
            TypedValue::Float(f) => {
                Number::from_f64(f).map_or_else(|| Value::String(f.to_string()), Value::Number)
            }
        }
    }
}
