use std::time::Duration;

use super::*;

#[test]
fn defaults_match_component_attributes() {
    let cfg = RevealConfig::default();
    assert_eq!(cfg.stroke_width, 1.0);
    assert_eq!(cfg.stroke_color, Argb(0xff00_0000));
    assert_eq!(cfg.fill_color, Argb(0xff00_0000));
    assert_eq!(cfg.fade_factor, 10.0);
    let t = cfg.timing();
    assert_eq!(t.trace, Duration::from_millis(4000));
    assert_eq!(t.fill, Duration::from_millis(4000));
    assert_eq!(t.fill_delay, Duration::from_millis(2000));
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = RevealConfig::from_json(
        r#"{
            "stroke_width": 3.5,
            "fill_start_delay_ms": 500,
            "geometry_source": { "inline": "<svg/>" },
            "padding": { "left": 4 },
            "ease": "out_cubic"
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.stroke_width, 3.5);
    assert_eq!(cfg.fill_start_delay_ms, 500);
    assert_eq!(cfg.trace_duration_ms, 4000);
    assert_eq!(cfg.padding.left, 4);
    assert_eq!(cfg.padding.top, 0);
    assert_eq!(cfg.ease, Ease::OutCubic);
    assert_eq!(cfg.geometry_source, Some(GeometrySource::inline("<svg/>")));
}

#[test]
fn invalid_values_are_normalized() {
    let cfg = RevealConfig::from_json(
        r#"{
            "stroke_width": -2,
            "initial_phase": 1.7,
            "trace_duration_ms": -100,
            "fill_duration_ms": -1,
            "fill_start_delay_ms": -5,
            "fade_factor": 0
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.stroke_width, 0.0);
    assert_eq!(cfg.initial_phase, 1.0);
    assert_eq!(cfg.trace_duration_ms, 0);
    assert_eq!(cfg.fill_duration_ms, 0);
    assert_eq!(cfg.fill_start_delay_ms, 0);
    assert_eq!(cfg.fade_factor, FALLBACK_FADE_FACTOR);
}

#[test]
fn unknown_fields_and_bad_json_are_serde_errors() {
    let err = RevealConfig::from_json(r#"{"stroke_widht": 2}"#).unwrap_err();
    assert!(matches!(err, RevealError::Serde(_)));
    assert!(RevealConfig::from_json("{").is_err());
}

#[test]
fn missing_config_file_is_reported() {
    let err = RevealConfig::from_json_file(Path::new("no/such/config.json")).unwrap_err();
    assert!(err.to_string().contains("config.json"));
}
