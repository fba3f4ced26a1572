//! Decoder tests

#![allow(clippy::expect_used, clippy::unwrap_used)]

use super::*;
use serde_json::json;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn decoder() -> Decoder {
    Decoder::default()
}

#[test]
fn test_default_options_key() {
    assert_eq!(decoder().options_key(), ",");
}

#[test]
fn test_options_key_with_comment() {
    let d = Decoder {
        delimiter: ';',
        comment: Some('#'),
    };
    assert_eq!(d.options_key(), ";#");
}

#[test]
fn test_empty_input_is_empty_mapping() {
    for format in [Format::Json, Format::Yaml, Format::Toml, Format::Unspecified] {
        let mapping = decoder().decode_to_mapping(b"", format).unwrap();
        assert!(mapping.is_empty(), "format {format}");
    }
}

#[test]
fn test_empty_input_value_is_empty_mapping() {
    let value = decoder().decode_to_value(b"", Format::Json).unwrap();
    assert_eq!(value, json!({}));
}

#[test]
fn test_json_round_trip() {
    let original = json!({
        "title": "Hello",
        "weight": 10,
        "draft": false,
        "tags": ["rust", "hugo"],
        "params": {"author": "someone", "rating": 4.5}
    });
    let bytes = serde_json::to_vec(&original).unwrap();
    let mapping = decoder().decode_to_mapping(&bytes, Format::Json).unwrap();
    assert_eq!(Value::Object(mapping), original);
}

#[test]
fn test_yaml_bool_key_becomes_string() {
    let mapping = decoder()
        .decode_to_mapping(b"{true: 1}", Format::Yaml)
        .unwrap();
    assert_eq!(mapping.get("true"), Some(&json!(1)));
}

#[test]
fn test_yaml_nested_keys_normalized() {
    let yaml = b"menu:\n  main:\n    - 1: first\n      2: second\nflags:\n  false: off\n";
    let value = decoder().decode_to_value(yaml, Format::Yaml).unwrap();
    assert_eq!(
        value,
        json!({
            "menu": {"main": [{"1": "first", "2": "second"}]},
            "flags": {"false": "off"}
        })
    );
}

#[test]
fn test_yaml_merge_keys_applied() {
    let yaml = b"base: &base\n  a: 1\n  b: 2\nderived:\n  <<: *base\n  b: 3\n";
    let mapping = decoder().decode_to_mapping(yaml, Format::Yaml).unwrap();
    assert_eq!(mapping["derived"], json!({"a": 1, "b": 3}));
}

#[test]
fn test_yaml_comments_only_is_empty_mapping() {
    let mapping = decoder()
        .decode_to_mapping(b"# nothing here\n", Format::Yaml)
        .unwrap();
    assert!(mapping.is_empty());
}

#[test]
fn test_json_null_is_empty_mapping() {
    let mapping = decoder().decode_to_mapping(b"null", Format::Json).unwrap();
    assert!(mapping.is_empty());
}

#[test]
fn test_toml_mapping() {
    let toml = b"title = \"Post\"\ndate = 2024-01-02T03:04:05Z\n[params]\ncount = 3\n";
    let mapping = decoder().decode_to_mapping(toml, Format::Toml).unwrap();
    assert_eq!(mapping["title"], "Post");
    assert_eq!(mapping["date"], "2024-01-02T03:04:05Z");
    assert_eq!(mapping["params"], json!({"count": 3}));
}

#[test]
fn test_top_level_sequence_rejected_for_mapping() {
    let err = decoder()
        .decode_to_mapping(b"[1, 2]", Format::Json)
        .unwrap_err();
    match err {
        MetaError::ParseFailure { format, message } => {
            assert_eq!(format, "json");
            assert!(message.contains("a sequence"), "{message}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_top_level_sequence_allowed_for_value() {
    let value = decoder()
        .decode_to_value(b"- a\n- b\n", Format::Yaml)
        .unwrap();
    assert_eq!(value, json!(["a", "b"]));
}

#[test]
fn test_parse_failures_carry_format() {
    for (data, format) in [
        (&b"{\"a\": "[..], Format::Json),
        (&b"a = = 1"[..], Format::Toml),
        (&b"a: [unclosed"[..], Format::Yaml),
    ] {
        let err = decoder().decode_to_mapping(data, format).unwrap_err();
        assert!(
            matches!(err, MetaError::ParseFailure { format: ref f, .. } if *f == format.to_string()),
            "unexpected error for {format}: {err:?}"
        );
    }
}

#[test]
fn test_invalid_utf8_toml_is_parse_failure() {
    let err = decoder()
        .decode_to_mapping(&[b'a', b'=', 0xff, 0xfe], Format::Toml)
        .unwrap_err();
    assert!(matches!(err, MetaError::ParseFailure { .. }));
}

#[test]
fn test_unsupported_format() {
    let err = decoder().decode(b"a: 1", Format::Unspecified).unwrap_err();
    assert!(matches!(err, MetaError::UnsupportedFormat { .. }));
}

#[test]
fn test_decode_typed_string_is_trimmed() {
    let typed = decoder()
        .decode_typed("  hello world \n", TargetKind::String)
        .unwrap();
    assert_eq!(typed, TypedValue::String("hello world".to_string()));
}

#[test]
fn test_decode_typed_int() {
    let typed = decoder().decode_typed(" 42 ", TargetKind::Int).unwrap();
    assert_eq!(typed, TypedValue::Int(42));
}

#[test]
fn test_decode_typed_int_conversion_error() {
    let err = decoder()
        .decode_typed("not-a-number", TargetKind::Int)
        .unwrap_err();
    match err {
        MetaError::TypeConversion { value, target } => {
            assert_eq!(value, "not-a-number");
            assert_eq!(target, "int");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_decode_typed_scalars() {
    let d = decoder();
    assert_eq!(
        d.decode_typed("0x10", TargetKind::Int64).unwrap(),
        TypedValue::Int64(16)
    );
    assert_eq!(
        d.decode_typed("2.5", TargetKind::Float).unwrap(),
        TypedValue::Float(2.5)
    );
    assert_eq!(
        d.decode_typed("T", TargetKind::Bool).unwrap(),
        TypedValue::Bool(true)
    );
    assert!(matches!(
        d.decode_typed("maybe", TargetKind::Bool),
        Err(MetaError::TypeConversion { .. })
    ));
}

#[test]
fn test_decode_typed_mapping_sniffs_format() {
    let d = decoder();
    for text in [r#"{"a": 1}"#, "a: 1", "a = 1"] {
        let typed = d.decode_typed(text, TargetKind::Mapping).unwrap();
        assert_eq!(
            typed,
            TypedValue::Mapping(json!({"a": 1}).as_object().cloned().unwrap()),
            "input {text}"
        );
    }
}

#[test]
fn test_decode_typed_mapping_without_markers_is_unsupported() {
    let err = decoder()
        .decode_typed("just words", TargetKind::Mapping)
        .unwrap_err();
    assert!(matches!(err, MetaError::UnsupportedFormat { .. }));
}

#[test]
fn test_decode_typed_sequence_is_yaml() {
    let d = decoder();
    assert_eq!(
        d.decode_typed("[1, 2, 3]", TargetKind::Sequence).unwrap(),
        TypedValue::Sequence(json!([1, 2, 3]))
    );
    assert_eq!(
        d.decode_typed("- a\n- b", TargetKind::Sequence).unwrap(),
        TypedValue::Sequence(json!(["a", "b"]))
    );
}

#[test]
fn test_decode_typed_blank_sequence_is_null() {
    for text in ["", "   ", "\n\t"] {
        assert_eq!(
            decoder().decode_typed(text, TargetKind::Sequence).unwrap(),
            TypedValue::Sequence(Value::Null),
            "input {text:?}"
        );
    }
}

#[test]
fn test_decode_file_to_mapping() {
    let mut file = NamedTempFile::with_suffix(".toml").unwrap();
    file.write_all(b"title = \"From file\"\n").unwrap();

    let mapping = decoder().decode_file_to_mapping(file.path()).unwrap();
    assert_eq!(mapping["title"], "From file");
}

#[test]
fn test_decode_file_unknown_extension() {
    let err = decoder()
        .decode_file_to_mapping(Path::new("content/post.md"))
        .unwrap_err();
    assert!(matches!(err, MetaError::UnknownFileFormat { .. }));
}

#[test]
fn test_decode_file_missing() {
    let temp = TempDir::new().unwrap();
    let err = decoder()
        .decode_file_to_mapping(&temp.path().join("missing.yaml"))
        .unwrap_err();
    assert!(matches!(err, MetaError::FileReadFailed { .. }));
}
