use super::*;

#[test]
fn defaults_are_valid() {
    let s = BrushSettings::default();
    s.validate().unwrap();
    assert!((s.stamp_opacity() - 0.03).abs() < 1e-12);
}

#[test]
fn out_of_range_values_are_rejected_not_clamped() {
    let s = BrushSettings::default();
    let err = s.with_brush_radius(200.0).unwrap_err();
    assert!(err.to_string().contains("brush_radius must be between 6 and 120"));

    assert!(s.with_heat_rate(0.0).is_err());
    assert!(s.with_heat_rate(f64::NAN).is_err());

    let err = s.with_max_undo_steps(5).unwrap_err();
    assert!(err.to_string().contains("between 10 and 100"));

    assert_eq!(s.with_max_undo_steps(100).unwrap().max_undo_steps, 100);
}

#[test]
fn range_endpoints_are_inclusive() {
    let s = BrushSettings::default();
    s.with_brush_radius(6.0).unwrap();
    s.with_brush_radius(120.0).unwrap();
    s.with_heat_rate(10.0).unwrap();
}

#[test]
fn heat_rate_scales_opacity() {
    let s = BrushSettings::default().with_heat_rate(10.0).unwrap();
    assert!((s.stamp_opacity() - 0.5).abs() < 1e-12);
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let s = BrushSettings::from_reader(r#"{"brush_radius": 18}"#.as_bytes()).unwrap();
    assert_eq!(s.brush_radius, 18.0);
    assert_eq!(s.heat_rate, 0.6);
    assert_eq!(s.max_undo_steps, 50);

    let err = BrushSettings::from_reader(r#"{"max_undo_steps": 500}"#.as_bytes()).unwrap_err();
    assert!(matches!(err, HeatbrushError::Validation(_)));
}
