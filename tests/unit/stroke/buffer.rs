use super::*;

fn buffer(w: u32, h: u32, blend: HeatBlend) -> AccumulationBuffer {
    AccumulationBuffer::new(PixelSize::new(w, h), 1.0, blend).unwrap()
}

#[test]
fn stamp_peaks_at_centre_and_fades_to_edge() {
    let mut b = buffer(41, 41, HeatBlend::SourceOver);
    b.stamp(&Stamp::new(20.5, 20.5, 10.0, 1.0));

    assert_eq!(b.get(20, 20), 255);
    let mid = b.get(25, 20);
    assert!(mid > 100 && mid < 160, "mid = {mid}");
    assert_eq!(b.get(31, 20), 0);
    assert_eq!(b.get(0, 0), 0);
}

#[test]
fn stamp_is_radially_symmetric() {
    let mut b = buffer(40, 40, HeatBlend::SourceOver);
    b.stamp(&Stamp::new(20.0, 20.0, 8.0, 0.7));
    for d in 0..8u32 {
        assert_eq!(b.get(20 + d, 20), b.get(19 - d, 20));
        assert_eq!(b.get(20, 20 + d), b.get(20, 19 - d));
    }
}

#[test]
fn zero_radius_or_opacity_draws_nothing() {
    let mut b = buffer(10, 10, HeatBlend::SourceOver);
    b.stamp(&Stamp::new(5.0, 5.0, 0.0, 1.0));
    b.stamp(&Stamp::new(5.0, 5.0, 4.0, 0.0));
    assert!(b.is_blank());
}

#[test]
fn stamps_outside_buffer_are_clipped() {
    let mut b = buffer(10, 10, HeatBlend::SourceOver);
    b.stamp(&Stamp::new(-50.0, -50.0, 5.0, 1.0));
    assert!(b.is_blank());

    b.stamp(&Stamp::new(0.0, 0.0, 4.0, 1.0));
    assert!(b.get(0, 0) > 0);
}

#[test]
fn scale_maps_logical_points_to_device_pixels() {
    let mut b = AccumulationBuffer::new(PixelSize::new(40, 40), 2.0, HeatBlend::SourceOver).unwrap();
    b.stamp(&Stamp::new(10.0, 10.0, 5.0, 1.0));
    // Centre lands at device (20, 20), radius 10 device pixels.
    assert!(b.get(20, 20) > 230);
    assert!(b.get(28, 20) > 0);
    assert_eq!(b.get(31, 20), 0);
}

#[test]
fn blend_modes_differ_on_overlap() {
    let s = Stamp::new(5.0, 5.0, 4.0, 0.5);

    let mut over = buffer(10, 10, HeatBlend::SourceOver);
    over.stamp(&s);
    let once = over.get(5, 5);
    over.stamp(&s);
    let twice = over.get(5, 5);
    assert!(twice > once);
    assert!(twice < once.saturating_mul(2));

    let mut lighter = buffer(10, 10, HeatBlend::Lighter);
    lighter.stamp(&s);
    lighter.stamp(&s);
    assert_eq!(lighter.get(5, 5), once.saturating_mul(2));

    let mut replace = buffer(10, 10, HeatBlend::Replace);
    replace.stamp(&s);
    replace.stamp(&Stamp::new(5.0, 5.0, 4.0, 0.1));
    assert!(replace.get(5, 5) < once);
}

#[test]
fn from_alpha_checks_len() {
    assert!(AccumulationBuffer::from_alpha(PixelSize::new(2, 2), vec![0; 3]).is_err());
    let b = AccumulationBuffer::from_alpha(PixelSize::new(2, 2), vec![0, 1, 2, 3]).unwrap();
    assert_eq!(b.get(1, 1), 3);
    assert_eq!(b.get(5, 5), 0);
}

#[test]
fn clear_resets_everything() {
    let mut b = buffer(10, 10, HeatBlend::SourceOver);
    b.stamp(&Stamp::new(5.0, 5.0, 4.0, 1.0));
    assert!(!b.is_blank());
    b.clear();
    assert!(b.is_blank());
}

#[test]
fn oversized_buffers_are_rejected_before_allocating() {
    let huge = PixelSize::new(1_000_000, 1_000_000);
    let err = AccumulationBuffer::new(huge, 1.0, HeatBlend::SourceOver).unwrap_err();
    assert!(matches!(err, HeatbrushError::Validation(_)));
    assert!(AccumulationBuffer::from_alpha(huge, Vec::new()).is_err());
}
