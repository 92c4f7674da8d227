use super::*;

#[test]
fn empty_json_yields_defaults() {
    let cfg = DrawConfig::from_json("{}").unwrap();
    assert_eq!(cfg, DrawConfig::default());
    assert_eq!(cfg.noise, 0.5);
    assert_eq!(cfg.thickness, 10);
    assert_eq!(cfg.line_break, 18);
    assert!(cfg.random_rotation);
    assert_eq!(cfg.variant, FontVariant::Gray);
}

#[test]
fn out_of_range_values_are_clamped_not_rejected() {
    let cfg = DrawConfig::from_json(
        r#"{"noise": 4.0, "slope": -9.5, "thickness": 0, "scale": -2.0, "line_break": 0}"#,
    )
    .unwrap();
    assert_eq!(cfg.noise, 1.0);
    assert_eq!(cfg.slope, Some(-2.0));
    assert_eq!(cfg.thickness, 1);
    assert_eq!(cfg.scale, 0.0);
    assert_eq!(cfg.line_break, 1);
}

#[test]
fn accessors_clamp_unnormalized_values() {
    let cfg = DrawConfig {
        noise: -0.3,
        slope: Some(7.0),
        thickness: 0,
        ..DrawConfig::default()
    };
    assert_eq!(cfg.noise(), 0.0);
    assert_eq!(cfg.slope(), Some(2.0));
    assert_eq!(cfg.thickness(), 1);
}

#[test]
fn colors_and_variant_round_trip_through_json() {
    let cfg = DrawConfig::from_json(
        r#"{"color1": {"r": 128, "g": 0, "b": 0, "a": 128}, "variant": "inverted"}"#,
    )
    .unwrap();
    assert_eq!(cfg.color1, Some(Rgba8Premul::new(128, 0, 0, 128)));
    assert_eq!(cfg.variant, FontVariant::Inverted);
    assert_eq!(cfg.background_color(), Rgba8Premul::opaque(0, 0, 0));
}

#[test]
fn explicit_background_overrides_variant() {
    let cfg = DrawConfig {
        background: Some(Rgba8Premul::opaque(1, 2, 3)),
        ..DrawConfig::default()
    };
    assert_eq!(cfg.background_color(), Rgba8Premul::opaque(1, 2, 3));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = DrawConfig::from_json("{\"noise\": \"loud\"}").unwrap_err();
    assert!(matches!(err, ScrawlError::Serde(_)));
    assert!(DrawConfig::from_json("{\"thickness\": 2.5}").is_err());
}

#[test]
fn unknown_keys_are_ignored() {
    let cfg = DrawConfig::from_json(r#"{"noise": 0.3, "font_size": 12}"#).unwrap();
    assert_eq!(cfg.noise, 0.3);
    assert_eq!(cfg.thickness, DEFAULT_THICKNESS);
}

#[test]
fn negative_counts_clamp_to_one() {
    let cfg = DrawConfig::from_json(r#"{"thickness": -4}"#).unwrap();
    assert_eq!(cfg.thickness, 1);

    let cfg = DrawConfig::from_json(r#"{"line_break": -1}"#).unwrap();
    assert_eq!(cfg.line_break, 1);

    let cfg = DrawConfig::from_json(r#"{"thickness": 99999999999}"#).unwrap();
    assert_eq!(cfg.thickness, u32::MAX);
}

#[test]
fn colors_are_capped_at_alpha() {
    let cfg =
        DrawConfig::from_json(r#"{"color2": {"r": 255, "g": 9, "b": 0, "a": 64}}"#).unwrap();
    assert_eq!(cfg.color2.map(Rgba8Premul::to_array), Some([64, 9, 0, 64]));
}
