#![allow(clippy::float_cmp)]

use super::*;

fn invalid_field(raw: &str) -> &'static str {
    match ViewerConfig::from_json(raw) {
        Err(ConfigError::Invalid { field, .. }) => field,
        other => panic!("expected invalid config, got {other:?}"),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_matches_stock_constants() {
    let config = ViewerConfig::default();
    assert_eq!(config.sizing, SizingPolicy::Diagonal);
    assert!(config.guides);
    assert_eq!(config.guide.color, "red");
    assert_eq!(config.guide.width, 2.0);
    assert_eq!(config.guide.length, 100.0);
    assert_eq!(config.gesture.rotation_threshold, 50.0);
    assert_eq!(config.gesture.rotation_sensitivity, 0.5);
    assert_eq!(config.zoom.min_scale, 0.5);
    assert_eq!(config.zoom.max_scale, 5.0);
    assert_eq!(config.zoom.zoom_in_factor, 1.05);
    assert_eq!(config.zoom.zoom_out_factor, 0.95);
}

#[test]
fn default_validates() {
    assert!(ViewerConfig::default().validate().is_ok());
}

#[test]
fn empty_object_is_default() {
    let config = ViewerConfig::from_json("{}").unwrap();
    assert_eq!(config, ViewerConfig::default());
}

// =============================================================
// Partial overrides
// =============================================================

#[test]
fn partial_override_keeps_other_defaults() {
    let config = ViewerConfig::from_json(r#"{"guides":false,"zoom":{"max_scale":8}}"#).unwrap();
    assert!(!config.guides);
    assert_eq!(config.zoom.max_scale, 8.0);
    assert_eq!(config.zoom.min_scale, 0.5);
    assert_eq!(config.sizing, SizingPolicy::Diagonal);
}

#[test]
fn sizing_override_parses() {
    let config = ViewerConfig::from_json(r#"{"sizing":{"mode":"fit-then-pad"}}"#).unwrap();
    assert_eq!(config.sizing, SizingPolicy::fit_then_pad());
}

#[test]
fn guide_style_override_parses() {
    let config = ViewerConfig::from_json(r##"{"guide":{"color":"#00ff00","length":40}}"##).unwrap();
    assert_eq!(config.guide.color, "#00ff00");
    assert_eq!(config.guide.length, 40.0);
    assert_eq!(config.guide.width, 2.0);
}

// =============================================================
// Errors
// =============================================================

#[test]
fn malformed_json_is_parse_error() {
    assert!(matches!(ViewerConfig::from_json("{guides:"), Err(ConfigError::Parse(_))));
}

#[test]
fn wrong_type_is_parse_error() {
    assert!(matches!(ViewerConfig::from_json(r#"{"guides":"yes"}"#), Err(ConfigError::Parse(_))));
}

#[test]
fn zero_min_scale_rejected() {
    assert_eq!(invalid_field(r#"{"zoom":{"min_scale":0}}"#), "zoom.min_scale");
}

#[test]
fn inverted_scale_range_rejected() {
    assert_eq!(invalid_field(r#"{"zoom":{"min_scale":2,"max_scale":1}}"#), "zoom.max_scale");
}

#[test]
fn negative_zoom_factor_rejected() {
    assert_eq!(invalid_field(r#"{"zoom":{"zoom_out_factor":-0.9}}"#), "zoom.zoom_out_factor");
}

#[test]
fn negative_threshold_rejected() {
    assert_eq!(invalid_field(r#"{"gesture":{"rotation_threshold":-1}}"#), "gesture.rotation_threshold");
}

#[test]
fn zero_guide_width_rejected() {
    assert_eq!(invalid_field(r#"{"guide":{"width":0}}"#), "guide.width");
}

#[test]
fn shrinking_padding_rejected() {
    assert_eq!(invalid_field(r#"{"sizing":{"mode":"fit-then-pad","padding":0.8}}"#), "sizing.padding");
}

#[test]
fn zero_max_size_rejected() {
    assert_eq!(invalid_field(r#"{"sizing":{"mode":"fit-then-pad","max_size":0}}"#), "sizing.max_size");
}

#[test]
fn invalid_error_message_names_field() {
    let err = ViewerConfig::from_json(r#"{"zoom":{"min_scale":0}}"#).unwrap_err();
    assert_eq!(err.to_string(), "invalid viewer config: zoom.min_scale must be positive");
}
