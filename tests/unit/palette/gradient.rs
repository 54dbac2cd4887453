use super::*;

fn two_stop() -> LinearGradient {
    LinearGradient::new(vec![
        ColorStop::new(0.0, Rgba8::new(0, 0, 0, 0)),
        ColorStop::new(1.0, Rgba8::new(200, 100, 50, 250)),
    ])
    .unwrap()
}

#[test]
fn sample_interpolates_between_stops() {
    let g = two_stop();
    assert_eq!(g.sample(0.0), Rgba8::new(0, 0, 0, 0));
    assert_eq!(g.sample(1.0), Rgba8::new(200, 100, 50, 250));
    assert_eq!(g.sample(0.5), Rgba8::new(100, 50, 25, 125));
}

#[test]
fn sample_clamps_outside_stop_range() {
    let g = LinearGradient::new(vec![
        ColorStop::new(0.25, Rgba8::new(10, 10, 10, 10)),
        ColorStop::new(0.75, Rgba8::new(20, 20, 20, 20)),
    ])
    .unwrap();
    assert_eq!(g.sample(0.0), Rgba8::new(10, 10, 10, 10));
    assert_eq!(g.sample(1.0), Rgba8::new(20, 20, 20, 20));
}

#[test]
fn rasterize_row_has_expected_len_and_samples_centres() {
    let g = two_stop();
    let row = g.rasterize_row(4);
    assert_eq!(row.len(), 16);
    // First pixel centre is t = 0.125.
    assert_eq!(&row[0..4], &g.sample(0.125).to_array());
    assert_eq!(&row[12..16], &g.sample(0.875).to_array());
}

#[test]
fn rejects_unsorted_or_out_of_range_stops() {
    assert!(LinearGradient::new(vec![]).is_err());
    assert!(
        LinearGradient::new(vec![
            ColorStop::new(0.6, Rgba8::TRANSPARENT),
            ColorStop::new(0.2, Rgba8::WHITE),
        ])
        .is_err()
    );
    assert!(LinearGradient::new(vec![ColorStop::new(1.5, Rgba8::WHITE)]).is_err());
}
