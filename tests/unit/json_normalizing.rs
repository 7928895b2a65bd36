//! Unit tests for JSON record normalization

use assert_matches::assert_matches;
use datatool::{normalize_records, parse_json, ConversionError, TableFormatter, ConversionConfig};
use serde_json::json;

#[test]
fn test_union_of_keys_in_encounter_order() {
    let table = normalize_records(json!([{"a": 1}, {"b": 2}])).unwrap();

    assert_eq!(table.columns(), ["a", "b"]);
    assert_eq!(table.rows()[0].len(), 1);
    assert_eq!(table.rows()[1].len(), 1);
    assert!(!table.rows()[1].contains("a"));
}

#[test]
fn test_missing_values_resolved_at_render_time() {
    let table = normalize_records(json!([{"a": 1}, {"b": 2}])).unwrap();
    let formatter = TableFormatter::new(ConversionConfig::default());
    assert_eq!(formatter.to_csv(&table), "a,b\n1,\n,2\n");
}

#[test]
fn test_top_level_object_is_schema_error() {
    assert_matches!(parse_json(r#"{"a": 1}"#), Err(ConversionError::Schema(_)));
}

#[test]
fn test_scalar_elements_are_schema_errors() {
    let err = parse_json(r#"[{"a": 1}, 2]"#).unwrap_err();
    assert_matches!(err, ConversionError::Schema(ref e) if e.row == Some(1));
}

#[test]
fn test_malformed_json_is_parse_error() {
    assert_matches!(parse_json("[{\"a\": 1,]"), Err(ConversionError::Parse(_)));
    assert_matches!(parse_json(""), Err(ConversionError::Parse(_)));
}
