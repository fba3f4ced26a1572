//! Conversion of parser-native trees into string-keyed JSON values.
//!
//! YAML allows any node as a mapping key (`true: 1`, `? [a, b]`), while
//! consumers of decoded front matter expect the string keys JSON and TOML
//! produce. Every tree leaves this module as a [`serde_json::Value`], so the
//! string-key invariant is carried by the type.

use serde_json::{Number, Value};
use serde_yaml::Value as YamlValue;

use crate::cast;

/// Rebuild a YAML tree with string keys on every mapping, at any depth.
///
/// Tags are dropped in favour of the tagged value. Floats JSON cannot hold
/// (`.inf`, `.nan`) are kept as their YAML spelling.
pub(crate) fn yaml_to_json(value: YamlValue) -> Value {
    match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => yaml_number(&n),
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(seq) => Value::Array(seq.into_iter().map(yaml_to_json).collect()),
        YamlValue::Mapping(mapping) => Value::Object(
            mapping
                .into_iter()
                .map(|(k, v)| (string_key(k), yaml_to_json(v)))
                .collect(),
        ),
        YamlValue::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

/// Convert a TOML tree. Date-times become their RFC 3339 string.
pub(crate) fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => {
            Number::from_f64(f).map_or_else(|| Value::String(f.to_string()), Value::Number)
        }
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

fn string_key(key: YamlValue) -> String {
    match key {
        YamlValue::String(s) => s,
        other => cast::yaml_key_to_string(&other),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::from(i)
    } else if let Some(u) = n.as_u64() {
        Value::from(u)
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .map_or_else(|| Value::String(n.to_string()), Value::Number)
    }
}
